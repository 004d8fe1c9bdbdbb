//! # evo-viz-engine
//!
//! A continuous-parameter genetic algorithm engine built to be driven live:
//! one generation per call, with parameters that can be changed between
//! generations without throwing the population away.
//!
//! ## Core Concepts
//!
//! - **Evolution engine**: a population of bounded real vectors evolved by
//!   ranking, elitism, tournament selection, uniform crossover and bounded
//!   uniform-noise mutation
//! - **Opaque fitness**: any `Fn(&[f64]) -> f64`; evaluator errors and
//!   panics are turned into a fallback score instead of aborting a generation
//! - **Convergence**: a sliding window of best-fitness values that stops a
//!   session once progress stalls
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use evo_viz_engine::prelude::*;
//!
//! let engine = EvolutionEngine::builder()
//!     .population_size(50)
//!     .mutation_rate(0.05)
//!     .crossover_rate(0.5)
//!     .elitism_count(2)
//!     .build(WavyRamp::new())?;
//!
//! let mut session = Session::new(engine, Some(42));
//! session.reset(0.0, 5.0)?;
//! let summary = session.run(500)?;
//! println!("best x = {:.4}", summary.best.genes()[0]);
//! ```

pub mod algorithms;
pub mod checkpoint;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod session;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::checkpoint::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::session::{RunSummary, Session, StepResult};
}
