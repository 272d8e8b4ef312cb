//! Simulation Module
//!
//! Monte Carlo runner: baseline → N noisy trials → aggregate report.
//! Đây là orchestrator chính của engine.
//!
//! ## Structure
//! - `types`: Request/report types (NoisePolicy, SimulationRequest, SimulationReport)
//! - `runner`: Trial loop and aggregation
//! - `reflection`: Narrative text derived from the stability score
//!
//! ## Usage
//! ```ignore
//! use crate::logic::simulation::{runner, SimulationRequest};
//! use crate::logic::scenario::ScenarioRule;
//!
//! let request = SimulationRequest::new(ScenarioRule::medical(), 142.0, 3.0);
//! let report = runner::run(&request)?;
//! println!("{}% stable", report.stability_percent);
//! ```

pub mod types;
pub mod runner;
pub mod reflection;

// Re-export main types for convenience
pub use types::{
    NoisePolicy, SimulationReport, SimulationRequest, TrialOutcome,
};

pub use runner::{run, run_with_rng};
