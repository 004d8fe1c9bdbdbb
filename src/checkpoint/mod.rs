//! Snapshots
//!
//! Serialization of engine state between generations.

pub mod state;

pub mod prelude {
    pub use super::state::{EngineSnapshot, SNAPSHOT_VERSION};
}
