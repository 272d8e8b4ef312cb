//! Built-in Scenario Rules & Thresholds
//!
//! Định nghĩa threshold và labels cho các scenario có sẵn.
//! KHÔNG chứa logic evaluate - chỉ constants.

// ============================================================================
// MEDICAL SCENARIO (Systolic Blood Pressure)
// ============================================================================

/// Systolic BP strictly above this is flagged (mmHg)
pub const MEDICAL_BP_THRESHOLD: f64 = 140.0;

pub const MEDICAL_TRUE_LABEL: &str = "High Risk";
pub const MEDICAL_FALSE_LABEL: &str = "Healthy";
pub const MEDICAL_VARIABLE: &str = "systolicBP";

// ============================================================================
// LOAN SCENARIO (Credit Score)
// ============================================================================

/// Credit score at or above this is approved
pub const LOAN_SCORE_THRESHOLD: f64 = 700.0;

pub const LOAN_TRUE_LABEL: &str = "Approved";
pub const LOAN_FALSE_LABEL: &str = "Rejected";
pub const LOAN_VARIABLE: &str = "creditScore";

// ============================================================================
// CUSTOM SCENARIO
// ============================================================================

/// Variable name when the custom rule doesn't name one
pub const DEFAULT_CUSTOM_VARIABLE: &str = "customValue";
