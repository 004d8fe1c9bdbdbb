//! Mutation operators
//!
//! This module provides bounded additive-noise mutation for real vectors.

use rand::Rng;

use crate::genome::bounds::Bounds;
use crate::genome::real_vector::RealVector;

/// Full width of the mutation noise interval
///
/// Noise is drawn from `[-MUTATION_STEP / 2, MUTATION_STEP / 2]`. The width
/// is absolute and does not scale with the search bounds.
pub const MUTATION_STEP: f64 = 0.5;

/// Uniform noise mutation
///
/// Each gene, with probability `mutation_rate`, receives additive noise
/// `(U(0,1) - 0.5) * step` and is then clamped back into bounds.
#[derive(Clone, Debug)]
pub struct UniformNoiseMutation {
    /// Per-gene mutation probability
    pub mutation_rate: f64,
    /// Full width of the noise interval
    pub step: f64,
}

impl UniformNoiseMutation {
    /// Create a new mutation with the default step
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Mutation rate must be in [0, 1]"
        );
        Self {
            mutation_rate,
            step: MUTATION_STEP,
        }
    }

    /// Mutate `genome` in place, keeping every touched gene inside `bounds`
    pub fn mutate<R: Rng + ?Sized>(&self, genome: &mut RealVector, bounds: &Bounds, rng: &mut R) {
        for gene in genome.genes_mut() {
            if rng.gen::<f64>() < self.mutation_rate {
                let noise = (rng.gen::<f64>() - 0.5) * self.step;
                *gene = bounds.clamp(*gene + noise);
            }
        }
    }
}
