//! Fitness traits
//!
//! This module defines the evaluator capability and the boundary the engine
//! calls it through.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::warn;

use crate::error::FitnessError;
use crate::genome::real_vector::RealVector;

/// Fitness assigned when an evaluator fails
pub const FALLBACK_FITNESS: f64 = 0.0;

/// Fitness evaluation trait
///
/// Maps a gene vector to a scalar score. Whether higher or lower is better
/// is decided by the engine's optimization direction, not by the evaluator.
///
/// Any `Fn(&[f64]) -> f64 + Send + Sync` closure is a fitness function.
/// Use [`FallibleFitness`] for closures that can report failure.
pub trait FitnessFunction: Send + Sync {
    /// Evaluate a gene vector
    fn evaluate(&self, genes: &[f64]) -> Result<f64, FitnessError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, genes: &[f64]) -> Result<f64, FitnessError> {
        Ok(self(genes))
    }
}

/// Adapter for evaluators that report failure through `Result`
///
/// Typically wraps an expression evaluator for a user-entered formula.
pub struct FallibleFitness<F>(pub F);

impl<F> FitnessFunction for FallibleFitness<F>
where
    F: Fn(&[f64]) -> Result<f64, FitnessError> + Send + Sync,
{
    fn evaluate(&self, genes: &[f64]) -> Result<f64, FitnessError> {
        (self.0)(genes)
    }
}

/// Owned, swappable fitness function
pub type BoxedFitness = Box<dyn FitnessFunction>;

/// Evaluate `genome`, converting any evaluator failure into [`FALLBACK_FITNESS`]
///
/// Both `Err` results and panics raised inside the evaluator are caught here.
pub fn evaluate_or_fallback(fitness: &dyn FitnessFunction, genome: &RealVector) -> f64 {
    let genes = genome.genes();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| fitness.evaluate(genes)))
        .unwrap_or_else(|payload| Err(FitnessError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "fitness evaluation failed for {:?}: {}; using fallback {}",
                genes, err, FALLBACK_FITNESS
            );
            FALLBACK_FITNESS
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_fitness_function() {
        let f = |genes: &[f64]| genes.iter().sum::<f64>();
        assert_eq!(f.evaluate(&[1.0, 2.0, 3.0]), Ok(6.0));
    }

    #[test]
    fn test_fallible_fitness_reports_error() {
        let f = FallibleFitness(|genes: &[f64]| {
            if genes[0] == 0.0 {
                Err(FitnessError::Failed("division by zero".to_string()))
            } else {
                Ok(1.0 / genes[0])
            }
        });
        assert_eq!(f.evaluate(&[2.0]), Ok(0.5));
        assert!(f.evaluate(&[0.0]).is_err());
    }

    #[test]
    fn test_evaluate_or_fallback_passes_values_through() {
        let f: BoxedFitness = Box::new(|genes: &[f64]| genes[0] * 2.0);
        let genome = RealVector::new(vec![1.5]);
        assert_eq!(evaluate_or_fallback(f.as_ref(), &genome), 3.0);
    }

    #[test]
    fn test_evaluate_or_fallback_on_error() {
        let f = FallibleFitness(|_: &[f64]| -> Result<f64, FitnessError> {
            Err(FitnessError::Failed("bad formula".into()))
        });
        let genome = RealVector::new(vec![4.0]);
        assert_eq!(evaluate_or_fallback(&f, &genome), FALLBACK_FITNESS);
    }

    #[test]
    fn test_evaluate_or_fallback_on_panic() {
        let f = |_: &[f64]| -> f64 { panic!("evaluator blew up") };
        let genome = RealVector::new(vec![4.0]);
        assert_eq!(evaluate_or_fallback(&f, &genome), FALLBACK_FITNESS);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(payload.as_ref()), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
