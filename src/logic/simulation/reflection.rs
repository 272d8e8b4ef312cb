//! Narrative Reflection
//!
//! Sinh text nhận xét từ stability score, ba mức cố định.
//! KHÔNG chứa số liệu - chỉ banding và wording.

use crate::constants::{CRITICAL_DROP_PERCENT, ROBUST_STABILITY_MIN, UNSTABLE_STABILITY_MIN};

/// Three-tier narrative for the stability score
pub fn reflection_text(stability_percent: f64) -> String {
    if stability_percent > ROBUST_STABILITY_MIN {
        "The system is robust. Chaos has little effect here.".to_string()
    } else if stability_percent > UNSTABLE_STABILITY_MIN {
        "Uncertainty is creeping in. The edge cases are dangerous.".to_string()
    } else {
        "Entropy dominates. The decision is no longer deterministic.".to_string()
    }
}

/// Percentage-point drop from the ideal (100%) outcome, framed by severity
pub fn impact_statement(flip_percent: f64) -> String {
    if flip_percent < f64::EPSILON {
        "No drop from the ideal outcome: every trial matched the baseline decision."
            .to_string()
    } else if flip_percent < CRITICAL_DROP_PERCENT {
        format!(
            "Moderate drop: noise cost {:.1} percentage points against the ideal outcome.",
            flip_percent
        )
    } else {
        format!(
            "Critical drop: noise cost {:.1} percentage points against the ideal outcome.",
            flip_percent
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
