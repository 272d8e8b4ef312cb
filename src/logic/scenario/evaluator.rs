//! Rule Evaluator
//!
//! CHỈ chứa logic evaluate - không có types, không có constants.
//! Input: ScenarioRule + một giá trị số. Output: Evaluation.

use super::types::{Evaluation, ScenarioRule};

/// Evaluate a rule against a single input value.
///
/// CORE LOGIC - Deterministic and total: every well-formed rule maps every
/// finite input to exactly one of its two labels. No failure modes.
pub fn evaluate(rule: &ScenarioRule, value: f64) -> Evaluation {
    let outcome = if rule.comparison.holds(value, rule.threshold) {
        rule.true_label.clone()
    } else {
        rule.false_label.clone()
    };

    Evaluation {
        outcome,
        tracked_value: value,
        threshold: rule.threshold,
    }
}

// ============================================================================
// TESTS
// ============================================================================
