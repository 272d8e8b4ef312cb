//! Scenario Module
//!
//! Đánh giá rule quyết định: input value + threshold + operator → label.
//! Đây là CORE STEP - nơi quyết định nhị phân được đưa ra.
//!
//! ## Structure
//! - `types`: Core types (ScenarioKind, Comparison, ScenarioRule, Evaluation)
//! - `rules`: Built-in thresholds and labels
//! - `evaluator`: Evaluation logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::scenario::{evaluate, ScenarioRule};
//!
//! let rule = ScenarioRule::medical();
//! let result = evaluate(&rule, 142.0);
//! assert_eq!(result.outcome, "High Risk");
//! ```

pub mod types;
pub mod rules;
pub mod evaluator;

// Re-export main types for convenience
pub use types::{Comparison, Evaluation, ScenarioKind, ScenarioRule};

pub use rules::{LOAN_SCORE_THRESHOLD, MEDICAL_BP_THRESHOLD};

pub use evaluator::evaluate;
