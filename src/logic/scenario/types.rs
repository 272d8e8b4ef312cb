//! Scenario Types
//!
//! Core types cho rule evaluation.
//! KHÔNG chứa logic evaluate - chỉ data structures.

use serde::{Deserialize, Serialize};

use super::rules;
use crate::error::{SimResult, SimulationError};

// ============================================================================
// SCENARIO KIND
// ============================================================================

/// Decision scenarios supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Systolic BP vượt ngưỡng → High Risk
    Medical,
    /// Credit score đạt ngưỡng → Approved
    Loan,
    /// Ngưỡng + operator + labels do người dùng định nghĩa
    Custom,
}

impl ScenarioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Medical => "medical",
            ScenarioKind::Loan => "loan",
            ScenarioKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// COMPARISON OPERATOR
// ============================================================================

/// Comparison applied between the input value and the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Gt,
    Lt,
    Gte,
    Lte,
}

impl Comparison {
    /// Wire symbol, as the frontend sends it
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }

    /// Parse a wire symbol. Unknown operators are rejected up front instead
    /// of silently falling through to the false label.
    pub fn parse(symbol: &str) -> Option<Comparison> {
        match symbol {
            ">" => Some(Comparison::Gt),
            "<" => Some(Comparison::Lt),
            ">=" => Some(Comparison::Gte),
            "<=" => Some(Comparison::Lte),
            _ => None,
        }
    }

    /// Does `value <op> threshold` hold?
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Gt => value > threshold,
            Comparison::Lt => value < threshold,
            Comparison::Gte => value >= threshold,
            Comparison::Lte => value <= threshold,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// SCENARIO RULE
// ============================================================================

/// Immutable per-run rule configuration
///
/// Invariant: `true_label != false_label`, both non-empty. Built-in
/// constructors satisfy this by definition; `custom` enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRule {
    pub kind: ScenarioKind,
    /// Name of the tracked quantity, for logs and chart labeling
    pub variable: String,
    pub threshold: f64,
    pub comparison: Comparison,
    /// Label when the comparison holds
    pub true_label: String,
    /// Label when it does not
    pub false_label: String,
}

impl ScenarioRule {
    /// Medical Diagnosis: BP > 140 → "High Risk", else "Healthy"
    pub fn medical() -> Self {
        Self {
            kind: ScenarioKind::Medical,
            variable: rules::MEDICAL_VARIABLE.to_string(),
            threshold: rules::MEDICAL_BP_THRESHOLD,
            comparison: Comparison::Gt,
            true_label: rules::MEDICAL_TRUE_LABEL.to_string(),
            false_label: rules::MEDICAL_FALSE_LABEL.to_string(),
        }
    }

    /// Loan Approval: score >= 700 → "Approved", else "Rejected"
    pub fn loan() -> Self {
        Self {
            kind: ScenarioKind::Loan,
            variable: rules::LOAN_VARIABLE.to_string(),
            threshold: rules::LOAN_SCORE_THRESHOLD,
            comparison: Comparison::Gte,
            true_label: rules::LOAN_TRUE_LABEL.to_string(),
            false_label: rules::LOAN_FALSE_LABEL.to_string(),
        }
    }

    /// User-defined rule. Rejects empty or identical labels.
    pub fn custom(
        variable: &str,
        threshold: f64,
        comparison: Comparison,
        true_label: &str,
        false_label: &str,
    ) -> SimResult<Self> {
        if true_label.trim().is_empty() || false_label.trim().is_empty() {
            return Err(SimulationError::InvalidRule(
                "labels must not be empty".to_string(),
            ));
        }
        if true_label == false_label {
            return Err(SimulationError::InvalidRule(format!(
                "labels must differ, both are \"{}\"",
                true_label
            )));
        }
        if !threshold.is_finite() {
            return Err(SimulationError::InvalidRule(format!(
                "threshold must be finite, got {}",
                threshold
            )));
        }

        let variable = if variable.trim().is_empty() {
            rules::DEFAULT_CUSTOM_VARIABLE
        } else {
            variable
        };

        Ok(Self {
            kind: ScenarioKind::Custom,
            variable: variable.to_string(),
            threshold,
            comparison,
            true_label: true_label.to_string(),
            false_label: false_label.to_string(),
        })
    }

    /// The other label of the pair
    pub fn opposite_label(&self, label: &str) -> &str {
        if label == self.true_label {
            &self.false_label
        } else {
            &self.true_label
        }
    }
}

// ============================================================================
// EVALUATION RESULT
// ============================================================================

/// Kết quả đánh giá một giá trị input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// One of the rule's two labels
    pub outcome: String,
    /// The value that was evaluated
    pub tracked_value: f64,
    /// Threshold the value was compared against
    pub threshold: f64,
}

// ============================================================================
// TESTS
// ============================================================================
