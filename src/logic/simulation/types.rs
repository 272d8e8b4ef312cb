//! Simulation Types
//!
//! Request/report types cho Monte Carlo runner.
//! KHÔNG chứa logic chạy trial - chỉ data structures.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants;
use crate::logic::scenario::ScenarioRule;

// ============================================================================
// NOISE POLICY
// ============================================================================

/// How the request's noise level maps to a Gaussian standard deviation.
///
/// Two scaling conventions exist: a fixed multiplier independent of the
/// input, and a percentage of the baseline. The active policy rides on every
/// request instead of hiding in a constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum NoisePolicy {
    /// sigma = noise_level * multiplier; scale independent of the input
    #[serde(rename_all = "camelCase")]
    FixedMultiplier { multiplier: f64 },
    /// sigma = |baseline| * noise_level / 100; noise_level is a percentage
    RelativePercent,
}

impl Default for NoisePolicy {
    fn default() -> Self {
        NoisePolicy::FixedMultiplier {
            multiplier: constants::get_noise_multiplier(),
        }
    }
}

impl NoisePolicy {
    /// Resolve the Gaussian standard deviation for one run
    pub fn std_dev(&self, noise_level: f64, baseline_value: f64) -> f64 {
        match self {
            NoisePolicy::FixedMultiplier { multiplier } => noise_level * multiplier,
            NoisePolicy::RelativePercent => baseline_value.abs() * noise_level / 100.0,
        }
    }
}

// ============================================================================
// SIMULATION REQUEST
// ============================================================================

/// Validated input cho một lần chạy Monte Carlo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub rule: ScenarioRule,
    /// Unperturbed input value, evaluated once for the baseline decision
    pub baseline_value: f64,
    /// Noise knob; meaning depends on `noise_policy`
    pub noise_level: f64,
    pub iterations: u32,
    #[serde(default)]
    pub noise_policy: NoisePolicy,
}

impl SimulationRequest {
    /// New request with default iteration count and noise policy
    pub fn new(rule: ScenarioRule, baseline_value: f64, noise_level: f64) -> Self {
        Self {
            rule,
            baseline_value,
            noise_level,
            iterations: constants::get_default_iterations(),
            noise_policy: NoisePolicy::default(),
        }
    }

    /// Override the trial count
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Override the noise scaling policy
    pub fn with_noise_policy(mut self, policy: NoisePolicy) -> Self {
        self.noise_policy = policy;
        self
    }
}

// ============================================================================
// TRIAL OUTCOME
// ============================================================================

/// Snapshot của một trial, giữ lại trong sample log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialOutcome {
    /// 1-based trial number
    pub trial: u32,
    pub simulated_value: f64,
    /// One of the rule's two labels
    pub outcome: String,
    /// Differs from the baseline decision?
    pub is_flip: bool,
}

// ============================================================================
// SIMULATION REPORT
// ============================================================================

/// Báo cáo đầy đủ của một run - stateless, không lưu lại sau response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub id: Uuid,
    /// Rule outcome with zero injected noise
    pub baseline_decision: String,
    /// Percentage of trials matching the baseline decision (0-100)
    pub stability_percent: f64,
    /// 100 - stability
    pub flip_percent: f64,
    /// Histogram: rounded simulated value → occurrence count, ordered by value
    pub distribution: BTreeMap<i64, u64>,
    /// Exactly two entries: baseline label and its opposite, as "NN.N%" strings
    pub probabilities: BTreeMap<String, String>,
    /// Up to 15 trial snapshots, flips first
    pub sample_logs: Vec<TrialOutcome>,
    /// Three-tier narrative derived from the stability score
    pub reflection: String,
    /// Percentage-point drop from the ideal outcome, framed by severity
    pub impact_statement: String,
    /// Name of the tracked quantity, for chart labeling
    pub variable: String,
    /// Threshold the scenario compares against, for chart annotation
    pub threshold: f64,
    /// Gaussian sigma actually used for this run
    pub noise_std_dev: f64,
    pub iterations: u32,
    pub generated_at: DateTime<Utc>,
}

// ============================================================================
// TESTS
// ============================================================================
