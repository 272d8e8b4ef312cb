//! Monte Carlo Runner
//!
//! CHỈ chứa orchestration - không có types.
//! Baseline một lần → N trials (noise + re-evaluate) → aggregate report.
//!
//! Mỗi invocation độc lập: không giữ state giữa các request, không I/O,
//! hoàn thành trong thời gian bị chặn bởi `iterations`.

use std::collections::BTreeMap;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use super::reflection;
use super::types::{NoisePolicy, SimulationReport, SimulationRequest, TrialOutcome};
use crate::constants::{FLIP_LOG_CAP, STABLE_LOG_CAP, UNSTABLE_STABILITY_MIN};
use crate::error::{SimResult, SimulationError};
use crate::logic::noise;
use crate::logic::scenario::evaluator;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Run a full stability simulation with a fresh OS-seeded random stream.
pub fn run(request: &SimulationRequest) -> SimResult<SimulationReport> {
    run_with_rng(request, &mut rand::thread_rng())
}

/// Run with a caller-supplied uniform source.
///
/// Production goes through [`run`]; tests inject a seeded `StdRng` so the
/// statistical assertions are reproducible.
pub fn run_with_rng<R: Rng + ?Sized>(
    request: &SimulationRequest,
    rng: &mut R,
) -> SimResult<SimulationReport> {
    validate(request)?;

    // 1. Baseline: rule outcome with zero injected noise
    let baseline = evaluator::evaluate(&request.rule, request.baseline_value);
    let baseline_decision = baseline.outcome;
    let opposite = request
        .rule
        .opposite_label(&baseline_decision)
        .to_string();

    log::debug!(
        "Baseline: {} = {} → {}",
        request.rule.variable,
        request.baseline_value,
        baseline_decision
    );

    // 2. Resolve the noise scale from the active policy
    let std_dev = request
        .noise_policy
        .std_dev(request.noise_level, request.baseline_value);

    // 3. Trial loop
    let mut distribution: BTreeMap<i64, u64> = BTreeMap::new();
    let mut logs: Vec<TrialOutcome> = Vec::new();
    let mut flip_count: u64 = 0;

    for i in 0..request.iterations {
        let simulated_value =
            request.baseline_value + noise::sample_normal(rng, 0.0, std_dev);

        let trial = evaluator::evaluate(&request.rule, simulated_value);
        let is_flip = trial.outcome != baseline_decision;

        *distribution.entry(simulated_value.round() as i64).or_insert(0) += 1;
        if is_flip {
            flip_count += 1;
        }

        // Capture flips generously, stable runs only as a small backfill
        if (is_flip && logs.len() < FLIP_LOG_CAP)
            || (!is_flip && logs.len() < STABLE_LOG_CAP)
        {
            logs.push(TrialOutcome {
                trial: i + 1,
                simulated_value,
                outcome: trial.outcome,
                is_flip,
            });
        }
    }

    // Flips first; stable sort keeps trial order inside each group
    logs.sort_by_key(|entry| !entry.is_flip);

    // 4. Stability statistics
    let stability_percent =
        (1.0 - flip_count as f64 / request.iterations as f64) * 100.0;
    let flip_percent = 100.0 - stability_percent;

    let mut probabilities = BTreeMap::new();
    probabilities.insert(baseline_decision.clone(), format_percent(stability_percent));
    probabilities.insert(opposite, format_percent(flip_percent));

    if stability_percent <= UNSTABLE_STABILITY_MIN {
        log::warn!(
            "High-entropy run: stability {:.1}% over {} trials (sigma {})",
            stability_percent,
            request.iterations,
            std_dev
        );
    }

    Ok(SimulationReport {
        id: Uuid::new_v4(),
        baseline_decision,
        stability_percent,
        flip_percent,
        distribution,
        probabilities,
        sample_logs: logs,
        reflection: reflection::reflection_text(stability_percent),
        impact_statement: reflection::impact_statement(flip_percent),
        variable: request.rule.variable.clone(),
        threshold: request.rule.threshold,
        noise_std_dev: std_dev,
        iterations: request.iterations,
        generated_at: Utc::now(),
    })
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Fail fast before any trial runs. All-or-nothing: a rejected request
/// produces no partial results.
fn validate(request: &SimulationRequest) -> SimResult<()> {
    if !request.baseline_value.is_finite() {
        return Err(SimulationError::InvalidValue(format!(
            "baseline value must be finite, got {}",
            request.baseline_value
        )));
    }
    if !request.noise_level.is_finite() {
        return Err(SimulationError::InvalidValue(format!(
            "noise level must be finite, got {}",
            request.noise_level
        )));
    }
    if request.noise_level < 0.0 {
        return Err(SimulationError::InvalidValue(format!(
            "noise level must be >= 0, got {}",
            request.noise_level
        )));
    }
    if request.iterations == 0 {
        return Err(SimulationError::InvalidIterations(0));
    }
    if let NoisePolicy::FixedMultiplier { multiplier } = request.noise_policy {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(SimulationError::InvalidValue(format!(
                "noise multiplier must be a positive finite number, got {}",
                multiplier
            )));
        }
    }
    Ok(())
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scenario::{Comparison, ScenarioRule};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn run_seeded(request: &SimulationRequest, seed: u64) -> SimulationReport {
        let mut rng = StdRng::seed_from_u64(seed);
        run_with_rng(request, &mut rng).expect("valid request must run")
    }

    // ------------------------------------------------------------------
    // Zero-noise runs are fully deterministic
    // ------------------------------------------------------------------

    #[test]
    fn test_zero_noise_medical_is_perfectly_stable() {
        init_logs();
        let request =
            SimulationRequest::new(ScenarioRule::medical(), 142.0, 0.0).with_iterations(1000);
        let report = run_seeded(&request, 1);

        assert_eq!(report.baseline_decision, "High Risk");
        assert_eq!(report.stability_percent, 100.0);
        assert_eq!(report.flip_percent, 0.0);
        assert!(report.reflection.contains("robust"));
        assert!(report.impact_statement.contains("No drop"));

        // Every simulated value collapses into the baseline bucket
        assert_eq!(report.distribution.len(), 1);
        assert_eq!(report.distribution.get(&142), Some(&1000));
    }

    #[test]
    fn test_zero_noise_loan_is_rejected() {
        let request = SimulationRequest::new(ScenarioRule::loan(), 650.0, 0.0);
        let report = run_seeded(&request, 2);
        assert_eq!(report.baseline_decision, "Rejected");
        assert_eq!(report.stability_percent, 100.0);
    }

    #[test]
    fn test_zero_noise_custom_scenario() {
        let rule =
            ScenarioRule::custom("speed", 60.0, Comparison::Gt, "Ticket", "Safe").unwrap();
        let request = SimulationRequest::new(rule, 65.0, 0.0);
        let report = run_seeded(&request, 3);
        assert_eq!(report.baseline_decision, "Ticket");
        assert_eq!(report.stability_percent, 100.0);
    }

    // ------------------------------------------------------------------
    // Aggregation invariants
    // ------------------------------------------------------------------

    #[test]
    fn test_stability_and_flip_sum_to_100() {
        let request =
            SimulationRequest::new(ScenarioRule::medical(), 140.5, 10.0).with_iterations(2000);
        let report = run_seeded(&request, 4);
        assert!(
            (report.stability_percent + report.flip_percent - 100.0).abs() < 1e-9,
            "stability {} + flip {} must equal 100",
            report.stability_percent,
            report.flip_percent
        );
    }

    #[test]
    fn test_distribution_counts_every_trial() {
        let request =
            SimulationRequest::new(ScenarioRule::loan(), 700.0, 5.0).with_iterations(5000);
        let report = run_seeded(&request, 5);
        let total: u64 = report.distribution.values().sum();
        assert_eq!(total, 5000);
    }

    #[test]
    fn test_probabilities_has_exactly_both_labels() {
        let request = SimulationRequest::new(ScenarioRule::medical(), 140.5, 10.0);
        let report = run_seeded(&request, 6);

        assert_eq!(report.probabilities.len(), 2);
        assert!(report.probabilities.contains_key("High Risk"));
        assert!(report.probabilities.contains_key("Healthy"));
        assert!(report.probabilities[&report.baseline_decision].ends_with('%'));
    }

    #[test]
    fn test_borderline_input_under_heavy_noise_flips() {
        // 140.5 is half a point over the threshold; sigma 15 swamps it,
        // so both outcomes must occur
        let request = SimulationRequest::new(ScenarioRule::medical(), 140.5, 10.0);
        let report = run_seeded(&request, 7);

        assert!(
            report.stability_percent > 0.0 && report.stability_percent < 100.0,
            "borderline run should be non-deterministic, got {}%",
            report.stability_percent
        );
        assert!(!report.impact_statement.contains("No drop"));
    }

    // ------------------------------------------------------------------
    // Sample logs
    // ------------------------------------------------------------------

    #[test]
    fn test_sample_logs_place_flips_first() {
        let request = SimulationRequest::new(ScenarioRule::medical(), 140.5, 10.0);
        let report = run_seeded(&request, 8);

        assert!(!report.sample_logs.is_empty());
        assert!(report.sample_logs.len() <= FLIP_LOG_CAP);

        let first_stable = report
            .sample_logs
            .iter()
            .position(|entry| !entry.is_flip);
        if let Some(pos) = first_stable {
            assert!(
                report.sample_logs[pos..].iter().all(|entry| !entry.is_flip),
                "no flip may appear after a stable entry"
            );
        }
    }

    #[test]
    fn test_sample_logs_backfill_when_no_flips() {
        let request = SimulationRequest::new(ScenarioRule::loan(), 800.0, 0.0);
        let report = run_seeded(&request, 9);

        // No flips possible; a small stable sample is still captured
        assert_eq!(report.sample_logs.len(), STABLE_LOG_CAP);
        assert!(report.sample_logs.iter().all(|entry| !entry.is_flip));
        assert_eq!(report.sample_logs[0].trial, 1);
    }

    #[test]
    fn test_logged_outcomes_use_rule_labels() {
        let rule =
            ScenarioRule::custom("load", 50.0, Comparison::Gte, "Overload", "Nominal").unwrap();
        let request = SimulationRequest::new(rule, 50.0, 4.0);
        let report = run_seeded(&request, 10);

        for entry in &report.sample_logs {
            assert!(
                entry.outcome == "Overload" || entry.outcome == "Nominal",
                "unexpected outcome label: {}",
                entry.outcome
            );
        }
    }

    // ------------------------------------------------------------------
    // Noise policies
    // ------------------------------------------------------------------

    #[test]
    fn test_relative_percent_policy_resolves_sigma() {
        let request = SimulationRequest::new(ScenarioRule::loan(), 700.0, 10.0)
            .with_noise_policy(NoisePolicy::RelativePercent);
        let report = run_seeded(&request, 11);
        assert_eq!(report.noise_std_dev, 70.0);
    }

    #[test]
    fn test_fixed_multiplier_policy_resolves_sigma() {
        let request = SimulationRequest::new(ScenarioRule::medical(), 140.0, 10.0)
            .with_noise_policy(NoisePolicy::FixedMultiplier { multiplier: 2.0 });
        let report = run_seeded(&request, 12);
        assert_eq!(report.noise_std_dev, 20.0);
    }

    // ------------------------------------------------------------------
    // Fail-fast validation
    // ------------------------------------------------------------------

    #[test]
    fn test_rejects_nonfinite_baseline() {
        let request = SimulationRequest::new(ScenarioRule::medical(), f64::NAN, 1.0);
        let result = run_seeded_result(&request);
        assert!(matches!(result, Err(SimulationError::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_nonfinite_noise() {
        let request =
            SimulationRequest::new(ScenarioRule::medical(), 142.0, f64::INFINITY);
        let result = run_seeded_result(&request);
        assert!(matches!(result, Err(SimulationError::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_negative_noise() {
        let request = SimulationRequest::new(ScenarioRule::medical(), 142.0, -1.0);
        let result = run_seeded_result(&request);
        assert!(matches!(result, Err(SimulationError::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let request =
            SimulationRequest::new(ScenarioRule::medical(), 142.0, 1.0).with_iterations(0);
        let result = run_seeded_result(&request);
        assert_eq!(result.unwrap_err(), SimulationError::InvalidIterations(0));
    }

    #[test]
    fn test_rejects_degenerate_multiplier() {
        let request = SimulationRequest::new(ScenarioRule::medical(), 142.0, 1.0)
            .with_noise_policy(NoisePolicy::FixedMultiplier { multiplier: 0.0 });
        let result = run_seeded_result(&request);
        assert!(matches!(result, Err(SimulationError::InvalidValue(_))));
    }

    fn run_seeded_result(
        request: &SimulationRequest,
    ) -> SimResult<SimulationReport> {
        let mut rng = StdRng::seed_from_u64(0);
        run_with_rng(request, &mut rng)
    }
}
