//! Population management
//!
//! This module provides individuals and the population container.

pub mod individual;
#[allow(clippy::module_inception)]
pub mod population;

pub mod prelude {
    pub use super::individual::Individual;
    pub use super::population::Population;
}
