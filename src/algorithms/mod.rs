//! Evolutionary algorithms
//!
//! This module provides the generational evolution engine.

pub mod engine;

pub mod prelude {
    pub use super::engine::{EngineConfig, EvolutionEngine, EvolutionEngineBuilder};
}
