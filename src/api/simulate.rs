//! Simulate Command - API cho external frontends
//!
//! Một invocation duy nhất: `(scenarioType, inputs, uncertaintyLevel,
//! customRules?) → SimulationReport` hoặc validation error. Required fields
//! thiếu là lỗi ngay - không silently substitute defaults.

use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::logic::scenario::{rules, Comparison, ScenarioKind, ScenarioRule};
use crate::logic::simulation::{runner, NoisePolicy, SimulationReport, SimulationRequest};

// ============================================================================
// REQUEST STRUCTURES
// ============================================================================

/// Per-scenario input values; the frontend sends the field matching the
/// selected scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    // Wire name is "systolicBP", not what camelCase would derive
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<f64>,
    pub credit_score: Option<f64>,
    pub custom_value: Option<f64>,
}

/// Custom rule payload, required only when scenarioType == "custom"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRuleParams {
    pub threshold: f64,
    /// One of ">", "<", ">=", "<="
    pub operator: String,
    pub true_label: String,
    pub false_label: String,
    #[serde(default)]
    pub variable_name: Option<String>,
}

/// Raw simulation request, exactly as the frontend posts it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Defaults to "medical" when entirely absent
    pub scenario_type: Option<String>,
    #[serde(default)]
    pub inputs: ScenarioInputs,
    pub uncertainty_level: Option<f64>,
    #[serde(default)]
    pub iterations: Option<u32>,
    #[serde(default)]
    pub noise_policy: Option<NoisePolicy>,
    #[serde(default)]
    pub custom_rules: Option<CustomRuleParams>,
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Validate raw params, run the engine, return the full report.
///
/// Stateless: nothing survives the call. Concurrent callers each get their
/// own independent run.
pub fn simulate(params: &SimulationParams) -> SimResult<SimulationReport> {
    let request = build_request(params)?;

    log::info!(
        "Received request: {} simulation, level {}",
        request.rule.kind,
        request.noise_level
    );

    runner::run(&request)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Assemble a typed engine request from loose wire params
fn build_request(params: &SimulationParams) -> SimResult<SimulationRequest> {
    let kind = match params.scenario_type.as_deref() {
        // Scenario may default only when entirely absent; a present but
        // unknown value is rejected
        None => ScenarioKind::Medical,
        Some("medical") => ScenarioKind::Medical,
        Some("loan") => ScenarioKind::Loan,
        Some("custom") => ScenarioKind::Custom,
        Some(other) => return Err(SimulationError::UnknownScenario(other.to_string())),
    };

    let noise_level = params
        .uncertainty_level
        .ok_or(SimulationError::MissingField("uncertaintyLevel"))?;

    let (rule, baseline_value) = match kind {
        ScenarioKind::Medical => (
            ScenarioRule::medical(),
            params
                .inputs
                .systolic_bp
                .ok_or(SimulationError::MissingField("inputs.systolicBP"))?,
        ),
        ScenarioKind::Loan => (
            ScenarioRule::loan(),
            params
                .inputs
                .credit_score
                .ok_or(SimulationError::MissingField("inputs.creditScore"))?,
        ),
        ScenarioKind::Custom => {
            let custom = params
                .custom_rules
                .as_ref()
                .ok_or(SimulationError::MissingField("customRules"))?;

            let comparison = Comparison::parse(&custom.operator)
                .ok_or_else(|| SimulationError::UnknownOperator(custom.operator.clone()))?;

            let variable = custom
                .variable_name
                .as_deref()
                .unwrap_or(rules::DEFAULT_CUSTOM_VARIABLE);

            let rule = ScenarioRule::custom(
                variable,
                custom.threshold,
                comparison,
                &custom.true_label,
                &custom.false_label,
            )?;

            let value = params
                .inputs
                .custom_value
                .ok_or(SimulationError::MissingField("inputs.customValue"))?;

            (rule, value)
        }
    };

    let mut request = SimulationRequest::new(rule, baseline_value, noise_level);
    if let Some(iterations) = params.iterations {
        request = request.with_iterations(iterations);
    }
    if let Some(policy) = params.noise_policy {
        request = request.with_noise_policy(policy);
    }

    Ok(request)
}

// ============================================================================
// TESTS
// ============================================================================
