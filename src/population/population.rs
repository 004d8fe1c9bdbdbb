//! Population type
//!
//! This module provides the Population container type.

use std::ops::Index;

use rand::Rng;

use crate::fitness::traits::FitnessFunction;
use crate::genome::bounds::Bounds;
use crate::genome::real_vector::RealVector;
use crate::population::individual::{rank_order, Individual};

/// An ordered population of evaluated individuals
///
/// Order only carries meaning right after [`Population::rank`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create `size` random individuals, each gene uniform in `bounds`, and evaluate them
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        gene_length: usize,
        bounds: &Bounds,
        fitness: &dyn FitnessFunction,
        rng: &mut R,
    ) -> Self {
        let mut population = Self::with_capacity(size);
        population.extend_random(size, gene_length, bounds, fitness, rng);
        population
    }

    /// Append `count` fresh random evaluated individuals
    pub fn extend_random<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        gene_length: usize,
        bounds: &Bounds,
        fitness: &dyn FitnessFunction,
        rng: &mut R,
    ) {
        self.individuals.reserve(count);
        for _ in 0..count {
            let genome = RealVector::random(gene_length, bounds, rng);
            self.individuals.push(Individual::evaluated(genome, fitness));
        }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Keep the first `len` individuals, in their current order
    pub fn truncate(&mut self, len: usize) {
        self.individuals.truncate(len);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Sort best-first under the given direction (stable)
    pub fn rank(&mut self, minimize: bool) {
        self.individuals.sort_by(|a, b| rank_order(a, b, minimize));
    }

    /// Get the best individual; the first one found wins ties
    pub fn best(&self, minimize: bool) -> Option<&Individual> {
        let mut iter = self.individuals.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, candidate| {
            if candidate.is_better_than(best, minimize) {
                candidate
            } else {
                best
            }
        }))
    }

    /// Get the worst individual; the first one found wins ties
    ///
    /// NaN fitness counts as worst in both directions.
    pub fn worst(&self, minimize: bool) -> Option<&Individual> {
        let mut iter = self.individuals.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |worst, candidate| {
            if worst.is_better_than(candidate, minimize) {
                candidate
            } else {
                worst
            }
        }))
    }

    /// Recompute every fitness with `fitness`; genes are untouched
    pub fn reevaluate(&mut self, fitness: &dyn FitnessFunction) {
        for individual in &mut self.individuals {
            individual.reevaluate(fitness);
        }
    }

    /// Clamp every genome into `bounds` and report how many changed
    pub fn clamp_to(&mut self, bounds: &Bounds) -> usize {
        let mut changed = 0;
        for individual in &mut self.individuals {
            if !individual.genome.is_within(bounds) {
                individual.genome.clamp_to(bounds);
                changed += 1;
            }
        }
        changed
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}
