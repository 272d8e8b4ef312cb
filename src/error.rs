//! Error handling

use thiserror::Error;

pub type SimResult<T> = Result<T, SimulationError>;

/// All failures are local to a single request/response cycle: no retries,
/// no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    // Request errors
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown scenario type: {0}")]
    UnknownScenario(String),

    #[error("unknown comparison operator: {0}")]
    UnknownOperator(String),

    #[error("invalid scenario rule: {0}")]
    InvalidRule(String),

    // Numeric domain errors
    #[error("invalid numeric value: {0}")]
    InvalidValue(String),

    #[error("iteration count must be positive, got {0}")]
    InvalidIterations(u32),
}
