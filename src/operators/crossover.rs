//! Crossover operators
//!
//! This module provides gene-wise recombination of real vectors.

use rand::Rng;

use crate::genome::real_vector::RealVector;

/// Uniform crossover
///
/// With probability `crossover_rate` each gene is independently taken from
/// either parent with equal odds; otherwise the offspring is a copy of
/// `parent1`. Values are inherited verbatim, never blended.
#[derive(Clone, Debug)]
pub struct UniformCrossover {
    /// Probability that recombination happens at all
    pub crossover_rate: f64,
    /// Probability of taking a gene from parent1 (default: 0.5)
    pub bias: f64,
}

impl UniformCrossover {
    /// Create a new uniform crossover applied with `crossover_rate`
    pub fn new(crossover_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&crossover_rate),
            "Crossover rate must be in [0, 1]"
        );
        Self {
            crossover_rate,
            bias: 0.5,
        }
    }

    /// Produce one offspring from two parents of equal dimension
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        rng: &mut R,
    ) -> RealVector {
        debug_assert_eq!(parent1.dimension(), parent2.dimension());

        if rng.gen::<f64>() >= self.crossover_rate {
            return parent1.clone();
        }

        parent1
            .genes()
            .iter()
            .zip(parent2.genes())
            .map(|(&a, &b)| if rng.gen::<f64>() < self.bias { a } else { b })
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_crossover_zero_rate_copies_parent1() {
        let mut rng = StdRng::seed_from_u64(11);
        let p1 = RealVector::new(vec![1.0, 2.0, 3.0]);
        let p2 = RealVector::new(vec![4.0, 5.0, 6.0]);
        let ux = UniformCrossover::new(0.0);

        for _ in 0..50 {
            assert_eq!(ux.crossover(&p1, &p2, &mut rng), p1);
        }
    }

    #[test]
    fn test_uniform_crossover_takes_genes_positionally() {
        let mut rng = StdRng::seed_from_u64(12);
        let p1 = RealVector::new(vec![1.0, 2.0, 3.0, 4.0]);
        let p2 = RealVector::new(vec![-1.0, -2.0, -3.0, -4.0]);
        let ux = UniformCrossover::new(1.0);

        let mut mixed = false;
        for _ in 0..50 {
            let child = ux.crossover(&p1, &p2, &mut rng);
            assert_eq!(child.dimension(), 4);
            for i in 0..4 {
                assert!(child[i] == p1[i] || child[i] == p2[i]);
            }
            if child != p1 && child != p2 {
                mixed = true;
            }
        }
        assert!(mixed, "full-rate crossover never mixed parents");
    }

    #[test]
    fn test_uniform_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(13);
        let p = RealVector::new(vec![0.25, 0.75]);
        let child = UniformCrossover::new(1.0).crossover(&p, &p.clone(), &mut rng);
        assert_eq!(child, p);
    }

    #[test]
    #[should_panic(expected = "Crossover rate must be in [0, 1]")]
    fn test_uniform_crossover_invalid_rate() {
        UniformCrossover::new(1.5);
    }
}
