//! Snapshot state structures
//!
//! Serializable engine state: configuration plus population.

use serde::{Deserialize, Serialize};

use crate::algorithms::engine::EngineConfig;
use crate::error::{EvoResult, EvolutionError};
use crate::population::individual::Individual;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Engine state at a generation boundary
///
/// The fitness function is not part of a snapshot; it is supplied again on
/// restore and every stored fitness is recomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Schema version for forward compatibility
    pub version: u32,
    /// Generations evolved since initialization
    pub generation: usize,
    /// Engine configuration
    pub config: EngineConfig,
    /// Population with fitness values
    pub population: Vec<Individual>,
}

impl EngineSnapshot {
    /// Create a new snapshot
    pub fn new(generation: usize, config: EngineConfig, population: Vec<Individual>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            generation,
            config,
            population,
        }
    }

    /// Check if snapshot is compatible with current version
    pub fn is_compatible(&self) -> bool {
        self.version <= SNAPSHOT_VERSION
    }

    /// Encode as JSON
    pub fn to_json(&self) -> EvoResult<String> {
        serde_json::to_string(self).map_err(|e| EvolutionError::Snapshot(e.to_string()))
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> EvoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EvolutionError::Snapshot(e.to_string()))
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> EvoResult<Self> {
        serde_json::from_str(json).map_err(|e| EvolutionError::Snapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::real_vector::RealVector;

    fn sample() -> EngineSnapshot {
        let population = vec![
            Individual::with_fitness(RealVector::new(vec![0.25]), 0.25),
            Individual::with_fitness(RealVector::new(vec![0.75]), 0.75),
        ];
        let config = EngineConfig {
            population_size: 2,
            elitism_count: 1,
            ..EngineConfig::default()
        };
        EngineSnapshot::new(12, config, population)
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"generation\":12"));
        assert!(json.contains("\"population_size\":2"));

        let decoded = EngineSnapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);
        assert!(decoded.is_compatible());
    }

    #[test]
    fn test_snapshot_future_version_is_incompatible() {
        let mut snapshot = sample();
        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(!snapshot.is_compatible());
    }

    #[test]
    fn test_snapshot_from_invalid_json() {
        let err = EngineSnapshot::from_json("{\"version\": 1").unwrap_err();
        assert!(matches!(err, EvolutionError::Snapshot(_)));
    }
}
