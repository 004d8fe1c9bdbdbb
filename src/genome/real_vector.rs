//! Real-valued vector genome
//!
//! This module provides the fixed-length real-valued vector genome used
//! for continuous optimization problems.

use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::Bounds;

/// Fixed-length real-valued vector genome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealVector {
    /// The genes (values) of this genome
    genes: Vec<f64>,
}

impl RealVector {
    /// Create a new real vector with the given genes
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Create a vector filled with a constant value
    pub fn filled(dimension: usize, value: f64) -> Self {
        Self {
            genes: vec![value; dimension],
        }
    }

    /// Sample every gene independently and uniformly from `bounds`
    pub fn random<R: Rng + ?Sized>(dimension: usize, bounds: &Bounds, rng: &mut R) -> Self {
        Self {
            genes: (0..dimension).map(|_| bounds.sample(rng)).collect(),
        }
    }

    /// Number of genes
    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    /// Get a reference to the genes
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Get a mutable reference to the genes
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    /// Get the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.genes
    }

    /// Clamp every gene into `bounds`
    pub fn clamp_to(&mut self, bounds: &Bounds) {
        for gene in &mut self.genes {
            *gene = bounds.clamp(*gene);
        }
    }

    /// Check that every gene lies within `bounds`
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.genes.iter().all(|&g| bounds.contains(g))
    }
}

impl Index<usize> for RealVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}

impl IndexMut<usize> for RealVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.genes[index]
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(genes: Vec<f64>) -> Self {
        Self::new(genes)
    }
}
