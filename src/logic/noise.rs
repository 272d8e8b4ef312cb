//! Noise Generator
//!
//! Gaussian sampling bằng Box-Muller transform trên một uniform source.
//! Source được inject qua `rand::Rng` - production dùng `thread_rng`,
//! tests dùng seeded `StdRng` để tái lập kết quả.

use rand::Rng;

/// Draw one sample from Normal(mean, std_dev²).
///
/// Box-Muller: two independent uniform(0,1) draws u, v, resampled when
/// exactly 0 so the logarithm stays in-domain, then
/// z = sqrt(-2·ln(u))·cos(2π·v). Each call is independent. Never returns
/// NaN or infinity for finite inputs.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let mut u = 0.0f64;
    let mut v = 0.0f64;
    while u == 0.0 {
        u = rng.gen::<f64>();
    }
    while v == 0.0 {
        v = rng.gen::<f64>();
    }

    let z = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
    mean + std_dev * z
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: usize = 100_000;

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<f64> = (0..SAMPLES).map(|_| sample_normal(&mut rng, 0.0, 1.0)).collect();

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let variance =
            draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / draws.len() as f64;
        let std_dev = variance.sqrt();

        assert!(mean.abs() < 0.02, "empirical mean too far from 0: {}", mean);
        assert!(
            (std_dev - 1.0).abs() < 0.02,
            "empirical std dev too far from 1: {}",
            std_dev
        );
    }

    #[test]
    fn test_mean_and_scale_shift() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..SAMPLES)
            .map(|_| sample_normal(&mut rng, 140.0, 15.0))
            .collect();

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(
            (mean - 140.0).abs() < 0.3,
            "empirical mean too far from 140: {}",
            mean
        );
    }

    #[test]
    fn test_zero_std_dev_returns_mean() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(sample_normal(&mut rng, 42.5, 0.0), 42.5);
        }
    }

    #[test]
    fn test_samples_are_always_finite() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..SAMPLES {
            let x = sample_normal(&mut rng, 0.0, 1.0);
            assert!(x.is_finite(), "sample must be finite, got {}", x);
        }
    }
}
