//! Search-space bounds
//!
//! A single closed interval `[min, max]` shared by every gene dimension.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};

/// Bounds for gene values (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// Rejects `min >= max` and non-finite limits.
    pub fn new(min: f64, max: f64) -> EvoResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(EvolutionError::config(format!(
                "bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(EvolutionError::config(format!(
                "min_x ({}) must be < max_x ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Unit bounds [0, 1]
    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Draw a value uniformly from the interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Uniform::new_inclusive(self.min, self.max).sample(rng)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<(f64, f64)> for Bounds {
    type Error = EvolutionError;

    fn try_from((min, max): (f64, f64)) -> EvoResult<Self> {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_new() {
        let b = Bounds::new(-5.0, 5.0).unwrap();
        assert_eq!(b.min, -5.0);
        assert_eq!(b.max, 5.0);
        assert_eq!(b.range(), 10.0);
    }

    #[test]
    fn test_bounds_rejects_inverted_and_empty() {
        assert!(matches!(
            Bounds::new(5.0, -5.0),
            Err(EvolutionError::Configuration(_))
        ));
        assert!(Bounds::new(1.0, 1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-5.0, 5.0).unwrap();
        assert!(b.contains(0.0));
        assert!(b.contains(-5.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-5.1));
        assert!(!b.contains(5.1));
    }

    #[test]
    fn test_bounds_clamp() {
        let b = Bounds::new(-5.0, 5.0).unwrap();
        assert_eq!(b.clamp(0.0), 0.0);
        assert_eq!(b.clamp(-10.0), -5.0);
        assert_eq!(b.clamp(10.0), 5.0);
    }

    #[test]
    fn test_bounds_sample_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Bounds::new(2.0, 3.0).unwrap();
        for _ in 0..1000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn test_bounds_try_from_tuple() {
        let b: Bounds = (0.0, 5.0).try_into().unwrap();
        assert_eq!(b, Bounds::new(0.0, 5.0).unwrap());
        assert!(Bounds::try_from((1.0, 0.0)).is_err());
    }
}
