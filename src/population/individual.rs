//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a genome with its fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::{evaluate_or_fallback, FitnessFunction};
use crate::genome::real_vector::RealVector;

/// An evaluated individual
///
/// Offspring live as bare [`RealVector`]s until they are scored, so an
/// `Individual` always carries the fitness of its current genes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The genome of this individual
    pub genome: RealVector,
    /// The fitness value
    pub fitness: f64,
}

impl Individual {
    /// Create an individual with a known fitness
    pub fn with_fitness(genome: RealVector, fitness: f64) -> Self {
        Self { genome, fitness }
    }

    /// Score `genome` with `fitness`
    pub fn evaluated(genome: RealVector, fitness: &dyn FitnessFunction) -> Self {
        let value = evaluate_or_fallback(fitness, &genome);
        Self {
            genome,
            fitness: value,
        }
    }

    /// Recompute the fitness of the current genes
    pub fn reevaluate(&mut self, fitness: &dyn FitnessFunction) {
        self.fitness = evaluate_or_fallback(fitness, &self.genome);
    }

    /// The gene values
    pub fn genes(&self) -> &[f64] {
        self.genome.genes()
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> RealVector {
        self.genome
    }

    /// Strictly better than `other` under the given direction
    ///
    /// A NaN fitness is never better, and any number beats NaN.
    pub fn is_better_than(&self, other: &Self, minimize: bool) -> bool {
        match (self.fitness.is_nan(), other.fitness.is_nan()) {
            (true, _) => false,
            (false, true) => true,
            (false, false) if minimize => self.fitness < other.fitness,
            (false, false) => self.fitness > other.fitness,
        }
    }
}

/// Total ordering that puts the better of two individuals first
///
/// NaN fitness sorts last in both directions.
pub fn rank_order(a: &Individual, b: &Individual, minimize: bool) -> Ordering {
    match (a.fitness.is_nan(), b.fitness.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if minimize => a.fitness.total_cmp(&b.fitness),
        (false, false) => b.fitness.total_cmp(&a.fitness),
    }
}
