//! Central Configuration Constants
//!
//! Single source of truth for all engine defaults.
//! To change the default trial count or noise scaling, only edit this file.

/// Default Monte Carlo iteration count per run
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default fixed noise multiplier: sigma = noise_level * multiplier
pub const DEFAULT_NOISE_MULTIPLIER: f64 = 1.5;

/// Max flip entries kept in the sample log
pub const FLIP_LOG_CAP: usize = 15;

/// Max stable (non-flip) entries kept in the sample log
pub const STABLE_LOG_CAP: usize = 5;

/// Stability strictly above this reads as robust
pub const ROBUST_STABILITY_MIN: f64 = 95.0;

/// Stability strictly above this (and not robust) reads as unstable;
/// at or below, the decision is effectively a coin toss
pub const UNSTABLE_STABILITY_MIN: f64 = 70.0;

/// Flip percentage at or above this counts as a critical drop
pub const CRITICAL_DROP_PERCENT: f64 = 20.0;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Decision Stability Simulator";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get default iteration count from environment or use default
pub fn get_default_iterations() -> u32 {
    std::env::var("DECISION_SIM_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
}

/// Get fixed noise multiplier from environment or use default
pub fn get_noise_multiplier() -> f64 {
    std::env::var("DECISION_SIM_NOISE_MULTIPLIER")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_NOISE_MULTIPLIER)
}
