//! Selection operators
//!
//! This module provides parent selection for the generational engine.

use rand::Rng;

use crate::population::individual::Individual;

/// Number of contestants per tournament
pub const TOURNAMENT_SIZE: usize = 3;

/// Tournament selection operator
///
/// Draws `tournament_size` contestants uniformly at random, with
/// replacement, and keeps the best. Comparisons are strict, so the earliest
/// drawn contestant wins a tie.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Select one individual and return its index in `population`
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Individual],
        minimize: bool,
        rng: &mut R,
    ) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let mut winner = rng.gen_range(0..population.len());
        for _ in 1..self.tournament_size {
            let contestant = rng.gen_range(0..population.len());
            if population[contestant].is_better_than(&population[winner], minimize) {
                winner = contestant;
            }
        }
        winner
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(TOURNAMENT_SIZE)
    }
}
