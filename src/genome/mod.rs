//! Genome types
//!
//! Bounded real-valued vectors, the only genome the engine evolves.

pub mod bounds;
pub mod real_vector;

pub mod prelude {
    pub use super::bounds::Bounds;
    pub use super::real_vector::RealVector;
}
