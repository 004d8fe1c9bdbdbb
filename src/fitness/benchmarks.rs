//! Benchmark fitness functions
//!
//! Ready-made objectives for demos and tests. Values are returned raw; the
//! engine's `minimize` flag decides which direction is better.

use std::f64::consts::PI;

use crate::error::FitnessError;
use crate::fitness::traits::FitnessFunction;

/// Trait for benchmark functions
pub trait BenchmarkFunction: Send + Sync {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Suggested search space bounds (min, max)
    fn bounds(&self) -> (f64, f64);

    /// Whether the interesting optimum is a minimum
    fn minimize(&self) -> bool;

    /// Evaluate the function
    fn evaluate_raw(&self, x: &[f64]) -> f64;
}

/// The visualizer's default objective: f(x) = x·sin(10x) + x·cos(2x)
///
/// Single-variable and multimodal on [0, 5]; only the first gene is read.
/// Maximized.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavyRamp;

impl WavyRamp {
    /// Create the function
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkFunction for WavyRamp {
    fn name(&self) -> &'static str {
        "WavyRamp"
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, 5.0)
    }

    fn minimize(&self) -> bool {
        false
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let x = x.first().copied().unwrap_or(0.0);
        x * (10.0 * x).sin() + x * (2.0 * x).cos()
    }
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Minimum 0 at the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;

impl Sphere {
    /// Create a new Sphere function
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkFunction for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn minimize(&self) -> bool {
        true
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// Rastrigin function: f(x) = 10n + Σ(xᵢ² - 10cos(2πxᵢ))
///
/// Highly multimodal with many local minima. Minimum 0 at the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;

impl Rastrigin {
    /// Create a new Rastrigin function
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkFunction for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn minimize(&self) -> bool {
        true
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        10.0 * n
            + x.iter()
                .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

/// Constant function, useful for exercising convergence detection
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f64);

impl BenchmarkFunction for Constant {
    fn name(&self) -> &'static str {
        "Constant"
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn minimize(&self) -> bool {
        false
    }

    fn evaluate_raw(&self, _x: &[f64]) -> f64 {
        self.0
    }
}

macro_rules! impl_fitness_for_benchmark {
    ($($ty:ty),*) => {
        $(
            impl FitnessFunction for $ty {
                fn evaluate(&self, genes: &[f64]) -> Result<f64, FitnessError> {
                    Ok(self.evaluate_raw(genes))
                }
            }
        )*
    };
}

impl_fitness_for_benchmark!(WavyRamp, Sphere, Rastrigin, Constant);
