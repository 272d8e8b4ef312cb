//! Decision Stability Simulator - Core Engine
//!
//! Monte Carlo engine đo độ ổn định của một quyết định ngưỡng dưới nhiễu
//! Gaussian: chạy baseline một lần, tiêm nhiễu N lần, đếm số lần quyết định
//! bị lật.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                DECISION STABILITY SIMULATOR                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────┐  ┌─────────────────────────┐ │
//! │  │  Request  │  │  Scenario  │  │  Noise Generator        │ │
//! │  │  Layer    │  │  Evaluator │  │  (Box-Muller)           │ │
//! │  │  (api)    │  │            │  │                         │ │
//! │  └─────┬─────┘  └─────┬──────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │              ┌─────────────────┐                            │
//! │              │ Monte Carlo     │                            │
//! │              │ Runner          │                            │
//! │              └─────────────────┘                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is stateless: one invocation per request, nothing shared
//! between runs, no I/O. UI, charting and HTTP routing live in external
//! callers that hand `api::simulate` a request and render the report.

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;

pub use api::{simulate, CustomRuleParams, ScenarioInputs, SimulationParams};
pub use error::{SimResult, SimulationError};
pub use logic::scenario::{Comparison, ScenarioKind, ScenarioRule};
pub use logic::simulation::{
    NoisePolicy, SimulationReport, SimulationRequest, TrialOutcome,
};
