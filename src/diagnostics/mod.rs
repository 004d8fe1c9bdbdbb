//! Diagnostics and statistics
//!
//! This module provides per-generation statistics and convergence detection.

pub mod convergence;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::population::individual::Individual;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Population size
    pub population_size: usize,
    /// Best fitness under the active direction
    pub best_fitness: f64,
    /// Worst fitness under the active direction
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
    /// Mean per-gene standard deviation across the population
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from a population slice
    ///
    /// Returns `None` for an empty slice.
    pub fn from_individuals(
        generation: usize,
        individuals: &[Individual],
        minimize: bool,
    ) -> Option<Self> {
        let first = individuals.first()?;
        let n = individuals.len() as f64;

        let (mut best, mut worst) = (first, first);
        for ind in &individuals[1..] {
            if ind.is_better_than(best, minimize) {
                best = ind;
            }
            if worst.is_better_than(ind, minimize) {
                worst = ind;
            }
        }

        let mean = individuals.iter().map(|i| i.fitness).sum::<f64>() / n;
        let variance = individuals
            .iter()
            .map(|i| (i.fitness - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            generation,
            population_size: individuals.len(),
            best_fitness: best.fitness,
            worst_fitness: worst.fitness,
            mean_fitness: mean,
            fitness_std: variance.sqrt(),
            diversity: gene_diversity(individuals),
        })
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gen {:>5} | n={:<4} best={:.6} mean={:.6} worst={:.6} std={:.4} div={:.4}",
            self.generation,
            self.population_size,
            self.best_fitness,
            self.mean_fitness,
            self.worst_fitness,
            self.fitness_std,
            self.diversity
        )
    }
}

/// Mean over gene positions of the population standard deviation at that position
fn gene_diversity(individuals: &[Individual]) -> f64 {
    let dimension = match individuals.first() {
        Some(ind) => ind.genome.dimension(),
        None => return 0.0,
    };
    if dimension == 0 {
        return 0.0;
    }

    let n = individuals.len() as f64;
    let total: f64 = (0..dimension)
        .map(|d| {
            let mean = individuals.iter().map(|i| i.genome[d]).sum::<f64>() / n;
            let var = individuals
                .iter()
                .map(|i| (i.genome[d] - mean).powi(2))
                .sum::<f64>()
                / n;
            var.sqrt()
        })
        .sum();
    total / dimension as f64
}

pub mod prelude {
    pub use super::convergence::{
        ConvergenceStatus, ConvergenceTracker, CONVERGENCE_THRESHOLD, WINDOW_SIZE,
    };
    pub use super::GenerationStats;
}
