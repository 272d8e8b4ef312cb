//! API Module
//!
//! Request layer giữa external callers (UI, HTTP gateway) và engine.
//! Nhận params thô dạng camelCase JSON từ frontend, validate, rồi gọi
//! Monte Carlo runner.
//!
//! Structure:
//! - simulate.rs: wire-facing params, validation, entry point

pub mod simulate;

// Re-export current API surface as default
pub use simulate::{simulate, CustomRuleParams, ScenarioInputs, SimulationParams};
