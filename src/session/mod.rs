//! Run sessions
//!
//! A [`Session`] is the cooperative driver around an [`EvolutionEngine`]:
//! the caller invokes [`Session::tick`] from its timer and the session
//! advances one generation per call while running, tracks convergence and
//! stops itself once the best fitness stagnates. Cancelling a run is just
//! not calling `tick` again (or calling [`Session::stop`]).

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithms::engine::EvolutionEngine;
use crate::diagnostics::convergence::{ConvergenceStatus, ConvergenceTracker};
use crate::diagnostics::GenerationStats;
use crate::error::{EvoResult, EvolutionError};
use crate::population::individual::Individual;

/// Default number of best-fitness values kept in the history
pub const HISTORY_LIMIT: usize = 10_000;

/// Outcome of a single [`Session::tick`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The session is stopped; nothing happened
    Idle,
    /// One generation was evolved
    Advanced {
        /// Generation just completed
        generation: usize,
        /// Best fitness in that generation
        best_fitness: f64,
    },
    /// One generation was evolved and convergence stopped the session
    Converged {
        /// Generation at which convergence was detected
        generation: usize,
        /// Best fitness in that generation
        best_fitness: f64,
    },
}

/// Summary returned by [`Session::run`]
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Generation reached when the run stopped
    pub generations: usize,
    /// Best individual at the end of the run
    pub best: Individual,
    /// Generation at which convergence was detected, if it was
    pub converged_at: Option<usize>,
    /// Statistics of the final generation
    pub stats: Option<GenerationStats>,
}

/// Driver owning an engine, its random source and a convergence tracker
pub struct Session {
    engine: EvolutionEngine,
    tracker: ConvergenceTracker,
    rng: StdRng,
    running: bool,
    last_stats: Option<GenerationStats>,
    best_history: Vec<f64>,
    history_limit: usize,
    recorded_generation: usize,
}

impl Session {
    /// Wrap `engine`; a `seed` makes the run reproducible
    pub fn new(engine: EvolutionEngine, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(engine, rng)
    }

    /// Wrap `engine` with an explicit random source
    pub fn with_rng(engine: EvolutionEngine, rng: StdRng) -> Self {
        let mut session = Self {
            engine,
            tracker: ConvergenceTracker::new(),
            rng,
            running: false,
            last_stats: None,
            best_history: Vec::new(),
            history_limit: HISTORY_LIMIT,
            recorded_generation: 0,
        };
        session.record_stats();
        session
    }

    /// Replace the convergence tracker (e.g. a custom window)
    pub fn with_tracker(mut self, tracker: ConvergenceTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Keep at most `limit` best-fitness values, dropping the oldest
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        assert!(limit >= 1, "History limit must be at least 1");
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// The engine
    pub fn engine(&self) -> &EvolutionEngine {
        &self.engine
    }

    /// The engine, for reconfiguration between ticks
    ///
    /// If the population is re-initialized or replaced through this handle,
    /// the next [`Session::tick`] notices the generation jump and starts a
    /// fresh convergence window and history.
    pub fn engine_mut(&mut self) -> &mut EvolutionEngine {
        &mut self.engine
    }

    /// The convergence tracker
    pub fn tracker(&self) -> &ConvergenceTracker {
        &self.tracker
    }

    /// Stop, re-initialize the population in `[min, max]` and clear convergence state
    pub fn reset(&mut self, min: f64, max: f64) -> EvoResult<()> {
        self.running = false;
        self.engine.initialize_population(min, max, &mut self.rng)?;
        self.tracker.reset();
        self.best_history.clear();
        self.record_stats();
        info!("session reset in [{}, {}]", min, max);
        Ok(())
    }

    /// Forget convergence history without touching the population
    ///
    /// Useful after a reconfiguration that changes the fitness landscape.
    pub fn clear_convergence(&mut self) {
        self.tracker.reset();
    }

    /// Resize the population using the session's random source
    pub fn resize_population(&mut self, size: usize) -> EvoResult<()> {
        self.engine.set_population_size(size, &mut self.rng)
    }

    /// Begin ticking; requires an initialized population
    pub fn start(&mut self) -> EvoResult<()> {
        if !self.engine.is_initialized() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if !self.running {
            info!("session started at generation {}", self.generation());
            self.running = true;
        }
        Ok(())
    }

    /// Stop ticking; the population is kept
    pub fn stop(&mut self) {
        if self.running {
            info!("session stopped at generation {}", self.generation());
            self.running = false;
        }
    }

    /// Whether ticks currently advance the engine
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Generations evolved since the last reset
    pub fn generation(&self) -> usize {
        self.engine.generation()
    }

    /// Best fitness of the current population
    pub fn best_fitness(&self) -> EvoResult<f64> {
        self.engine.best().map(|best| best.fitness)
    }

    /// Generation at which convergence was detected, if any
    pub fn converged_at(&self) -> Option<usize> {
        match self.tracker.status() {
            ConvergenceStatus::Converged { generation, .. } => Some(generation),
            ConvergenceStatus::NotConverged => None,
        }
    }

    /// Statistics of the most recent generation
    pub fn last_stats(&self) -> Option<&GenerationStats> {
        self.last_stats.as_ref()
    }

    /// Best fitness per generation since the last reset, oldest first
    ///
    /// Holds at most the history limit ([`HISTORY_LIMIT`] by default).
    pub fn best_fitness_history(&self) -> &[f64] {
        &self.best_history
    }

    /// Advance one generation if running
    pub fn tick(&mut self) -> EvoResult<StepResult> {
        if !self.running {
            return Ok(StepResult::Idle);
        }
        if self.engine.generation() != self.recorded_generation {
            self.resync();
        }

        self.engine.evolve(&mut self.rng)?;
        let generation = self.engine.generation();
        let best_fitness = self.engine.best()?.fitness;
        self.record_stats();

        match self.tracker.record(generation, best_fitness) {
            ConvergenceStatus::Converged { delta, .. } => {
                info!(
                    "converged at generation {} (best {}, window delta {})",
                    generation, best_fitness, delta
                );
                self.running = false;
                Ok(StepResult::Converged {
                    generation,
                    best_fitness,
                })
            }
            ConvergenceStatus::NotConverged => Ok(StepResult::Advanced {
                generation,
                best_fitness,
            }),
        }
    }

    /// Start and tick until convergence, or until `max_generations` more generations ran
    pub fn run(&mut self, max_generations: usize) -> EvoResult<RunSummary> {
        self.start()?;
        for _ in 0..max_generations {
            match self.tick()? {
                StepResult::Advanced { .. } => {}
                StepResult::Converged { .. } | StepResult::Idle => break,
            }
        }
        self.stop();

        Ok(RunSummary {
            generations: self.generation(),
            best: self.engine.best()?,
            converged_at: self.converged_at(),
            stats: self.last_stats.clone(),
        })
    }

    // The engine was re-initialized or replaced outside of `reset`
    fn resync(&mut self) {
        warn!(
            "engine re-initialized outside the session (generation {} -> {})",
            self.recorded_generation,
            self.engine.generation()
        );
        self.tracker.reset();
        self.best_history.clear();
        self.record_stats();
    }

    fn record_stats(&mut self) {
        let generation = self.engine.generation();
        self.recorded_generation = generation;
        self.last_stats = GenerationStats::from_individuals(
            generation,
            self.engine.individuals(),
            self.engine.config().minimize,
        );
        if let Some(stats) = &self.last_stats {
            self.best_history.push(stats.best_fitness);
            self.trim_history();
        }
    }

    fn trim_history(&mut self) {
        if self.best_history.len() > self.history_limit {
            let excess = self.best_history.len() - self.history_limit;
            self.best_history.drain(..excess);
        }
    }
}
