//! Error types for evo-viz-engine
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error raised by a fitness evaluator
///
/// Evaluator errors never escape the engine: they are converted into the
/// fallback fitness at the evaluation boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitnessError {
    /// The evaluator could not produce a value (bad formula, domain error, ...)
    #[error("Evaluation failed: {0}")]
    Failed(String),

    /// The evaluator panicked
    #[error("Evaluator panicked: {0}")]
    Panicked(String),
}

/// Top-level error type for engine operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Operation requires an initialized population
    #[error("Empty population: call initialize_population first")]
    EmptyPopulation,

    /// Genome length does not match the configured gene length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Snapshot could not be encoded, decoded or restored
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl EvolutionError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type alias for engine operations
pub type EvoResult<T> = Result<T, EvolutionError>;
