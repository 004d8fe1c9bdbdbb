//! Convergence detection
//!
//! Tracks the best fitness of the most recent generations in a fixed-size
//! window and flags stagnation when the window's endpoints barely differ.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of generations kept in the window
pub const WINDOW_SIZE: usize = 20;

/// Default endpoint difference below which the run counts as converged
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Result of a convergence check
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConvergenceStatus {
    /// Window not full yet, or best fitness still moving
    NotConverged,
    /// Best fitness changed by less than the threshold across the window
    Converged {
        /// Generation at which convergence was first detected
        generation: usize,
        /// `|newest - oldest|` over the window at that point
        delta: f64,
    },
}

impl ConvergenceStatus {
    /// Check if converged
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Sliding-window convergence tracker
///
/// Push the best fitness after every generation with [`record`]. The window
/// is FIFO; once it holds `capacity` values, `|newest - oldest|` below the
/// threshold latches the converged state until [`reset`].
///
/// [`record`]: ConvergenceTracker::record
/// [`reset`]: ConvergenceTracker::reset
#[derive(Clone, Debug)]
pub struct ConvergenceTracker {
    capacity: usize,
    threshold: f64,
    window: VecDeque<f64>,
    status: ConvergenceStatus,
}

impl ConvergenceTracker {
    /// Tracker with a 20-generation window and a 0.001 threshold
    pub fn new() -> Self {
        Self::with_window(WINDOW_SIZE, CONVERGENCE_THRESHOLD)
    }

    /// Tracker with a custom window size and threshold
    pub fn with_window(capacity: usize, threshold: f64) -> Self {
        assert!(capacity >= 2, "Window must hold at least two generations");
        Self {
            capacity,
            threshold,
            window: VecDeque::with_capacity(capacity),
            status: ConvergenceStatus::NotConverged,
        }
    }

    /// Record the best fitness of a completed generation
    pub fn record(&mut self, generation: usize, best_fitness: f64) -> ConvergenceStatus {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(best_fitness);

        if self.status.is_converged() {
            return self.status;
        }

        if let Some(delta) = self.delta() {
            if delta < self.threshold {
                self.status = ConvergenceStatus::Converged { generation, delta };
            }
        }
        self.status
    }

    /// `|newest - oldest|`, once the window is full
    pub fn delta(&self) -> Option<f64> {
        if self.window.len() < self.capacity {
            return None;
        }
        match (self.window.front(), self.window.back()) {
            (Some(oldest), Some(newest)) => Some((newest - oldest).abs()),
            _ => None,
        }
    }

    /// Current status
    pub fn status(&self) -> ConvergenceStatus {
        self.status
    }

    /// Check if converged
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Values currently in the window, oldest first
    pub fn window(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }

    /// Number of values currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Clear the window and the converged flag
    pub fn reset(&mut self) {
        self.window.clear();
        self.status = ConvergenceStatus::NotConverged;
    }
}

impl Default for ConvergenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_fitness_converges_when_window_fills() {
        let mut tracker = ConvergenceTracker::new();

        for generation in 1..WINDOW_SIZE {
            let status = tracker.record(generation, 4.2);
            assert_eq!(status, ConvergenceStatus::NotConverged);
        }

        let status = tracker.record(WINDOW_SIZE, 4.2);
        assert_eq!(
            status,
            ConvergenceStatus::Converged {
                generation: WINDOW_SIZE,
                delta: 0.0
            }
        );
    }

    #[test]
    fn test_improving_fitness_does_not_converge() {
        let mut tracker = ConvergenceTracker::new();
        for generation in 1..=100 {
            let status = tracker.record(generation, generation as f64 * 0.01);
            assert!(!status.is_converged());
        }
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut tracker = ConvergenceTracker::with_window(3, 0.5);
        tracker.record(1, 10.0);
        tracker.record(2, 5.0);
        tracker.record(3, 1.0);
        assert_eq!(tracker.window().collect::<Vec<_>>(), vec![10.0, 5.0, 1.0]);
        assert_eq!(tracker.delta(), Some(9.0));

        tracker.record(4, 1.2);
        assert_eq!(tracker.window().collect::<Vec<_>>(), vec![5.0, 1.0, 1.2]);
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn test_convergence_after_plateau() {
        let mut tracker = ConvergenceTracker::with_window(3, 0.001);
        assert!(!tracker.record(1, 0.0).is_converged());
        assert!(!tracker.record(2, 1.0).is_converged());
        assert!(!tracker.record(3, 2.0).is_converged());
        assert!(!tracker.record(4, 2.0).is_converged());
        assert_eq!(
            tracker.record(5, 2.0),
            ConvergenceStatus::Converged {
                generation: 5,
                delta: 0.0
            }
        );
    }

    #[test]
    fn test_converged_state_latches_until_reset() {
        let mut tracker = ConvergenceTracker::with_window(2, 0.1);
        tracker.record(1, 1.0);
        assert!(tracker.record(2, 1.0).is_converged());

        // Later movement does not clear the flag or move the reported generation
        let status = tracker.record(3, 50.0);
        assert_eq!(
            status,
            ConvergenceStatus::Converged {
                generation: 2,
                delta: 0.0
            }
        );

        tracker.reset();
        assert!(tracker.is_empty());
        assert!(!tracker.is_converged());
        assert_eq!(tracker.delta(), None);
    }

    #[test]
    fn test_delta_just_above_threshold() {
        let mut tracker = ConvergenceTracker::with_window(2, 0.001);
        tracker.record(1, 1.0);
        assert!(!tracker.record(2, 1.002).is_converged());
    }
}
