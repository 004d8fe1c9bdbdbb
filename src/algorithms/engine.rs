//! Generational evolution engine
//!
//! This module implements a stateful generational genetic algorithm over
//! bounded real vectors that can be advanced one generation at a time and
//! reconfigured between generations without losing its population.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checkpoint::state::EngineSnapshot;
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::{BoxedFitness, FitnessFunction};
use crate::genome::bounds::Bounds;
use crate::operators::crossover::UniformCrossover;
use crate::operators::mutation::UniformNoiseMutation;
use crate::operators::selection::TournamentSelection;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Configuration for the evolution engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Population size
    pub population_size: usize,
    /// Per-gene mutation probability
    pub mutation_rate: f64,
    /// Probability that two parents are recombined
    pub crossover_rate: f64,
    /// Number of top individuals copied unchanged into the next generation
    pub elitism_count: usize,
    /// Number of genes per individual (fixed for the engine's lifetime)
    pub gene_length: usize,
    /// Search space for every gene
    pub bounds: Bounds,
    /// Lower fitness is better when set
    pub minimize: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.05,
            crossover_rate: 0.5,
            elitism_count: 2,
            gene_length: 1,
            bounds: Bounds::unit(),
            minimize: false,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with unit bounds
    pub fn new(
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        elitism_count: usize,
        gene_length: usize,
        minimize: bool,
    ) -> Self {
        Self {
            population_size,
            mutation_rate,
            crossover_rate,
            elitism_count,
            gene_length,
            bounds: Bounds::unit(),
            minimize,
        }
    }

    /// Check every field against its contract
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::config("population_size must be > 0"));
        }
        if self.gene_length == 0 {
            return Err(EvolutionError::config("gene_length must be > 0"));
        }
        if self.elitism_count > self.population_size {
            return Err(EvolutionError::config(format!(
                "elitism_count ({}) must be <= population_size ({})",
                self.elitism_count, self.population_size
            )));
        }
        validate_rate("mutation_rate", self.mutation_rate)?;
        validate_rate("crossover_rate", self.crossover_rate)?;
        Bounds::new(self.bounds.min, self.bounds.max)?;
        Ok(())
    }
}

fn validate_rate(name: &str, rate: f64) -> EvoResult<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(EvolutionError::config(format!(
            "{} must be in [0, 1], got {}",
            name, rate
        )))
    }
}

/// Builder for EvolutionEngine
#[derive(Clone, Debug, Default)]
pub struct EvolutionEngineBuilder {
    config: EngineConfig,
}

impl EvolutionEngineBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the per-gene mutation probability
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the crossover probability
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.config.crossover_rate = rate;
        self
    }

    /// Set the number of elite individuals to preserve
    pub fn elitism_count(mut self, count: usize) -> Self {
        self.config.elitism_count = count;
        self
    }

    /// Set the genome length
    pub fn gene_length(mut self, length: usize) -> Self {
        self.config.gene_length = length;
        self
    }

    /// Set the search space bounds
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.config.bounds = Bounds { min, max };
        self
    }

    /// Minimize instead of maximize
    pub fn minimize(mut self, minimize: bool) -> Self {
        self.config.minimize = minimize;
        self
    }

    /// Build the engine
    pub fn build<F>(self, fitness: F) -> EvoResult<EvolutionEngine>
    where
        F: FitnessFunction + 'static,
    {
        EvolutionEngine::new(self.config, fitness)
    }
}

/// Stateful generational genetic algorithm
///
/// Construct it, call [`initialize_population`], then drive it with
/// [`evolve`]. All operations take `&self`/`&mut self`, so a
/// reconfiguration can never interleave with an in-flight generation.
///
/// # Example
///
/// ```rust,ignore
/// use evo_viz_engine::prelude::*;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let mut engine = EvolutionEngine::builder()
///     .population_size(50)
///     .elitism_count(2)
///     .build(WavyRamp::new())?;
///
/// engine.initialize_population(0.0, 5.0, &mut rng)?;
/// for _ in 0..100 {
///     engine.evolve(&mut rng)?;
/// }
/// println!("best: {:?}", engine.best()?);
/// ```
///
/// [`initialize_population`]: EvolutionEngine::initialize_population
/// [`evolve`]: EvolutionEngine::evolve
pub struct EvolutionEngine {
    config: EngineConfig,
    fitness: BoxedFitness,
    population: Population,
    generation: usize,
}

impl std::fmt::Debug for EvolutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionEngine")
            .field("config", &self.config)
            .field("population_len", &self.population.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl EvolutionEngine {
    /// Create an engine with an empty population
    pub fn new<F>(config: EngineConfig, fitness: F) -> EvoResult<Self>
    where
        F: FitnessFunction + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            fitness: Box::new(fitness),
            population: Population::new(),
            generation: 0,
        })
    }

    /// Create a builder for EvolutionEngine
    pub fn builder() -> EvolutionEngineBuilder {
        EvolutionEngineBuilder::new()
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generations evolved since the last initialization
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether a population exists
    pub fn is_initialized(&self) -> bool {
        !self.population.is_empty()
    }

    /// Set the bounds and replace the population with fresh random individuals
    ///
    /// Resets all evolutionary progress, including the generation counter.
    pub fn initialize_population<R: Rng + ?Sized>(
        &mut self,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> EvoResult<()> {
        self.config.bounds = Bounds::new(min, max)?;
        self.population = Population::random(
            self.config.population_size,
            self.config.gene_length,
            &self.config.bounds,
            self.fitness.as_ref(),
            rng,
        );
        self.generation = 0;

        info!(
            "initialized {} individuals in [{}, {}]",
            self.population.len(),
            min,
            max
        );
        Ok(())
    }

    /// Advance exactly one generation
    ///
    /// Ranks the current population, carries the elites over by value, then
    /// fills the remaining slots with tournament-selected, crossed-over,
    /// mutated and evaluated offspring.
    pub fn evolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EvoResult<()> {
        if self.population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let minimize = self.config.minimize;
        let size = self.config.population_size;
        let selection = TournamentSelection::default();
        let crossover = UniformCrossover::new(self.config.crossover_rate);
        let mutation = UniformNoiseMutation::new(self.config.mutation_rate);

        let mut ranked = self.population.clone();
        ranked.rank(minimize);

        let mut next = Population::with_capacity(size);
        for elite in ranked.iter().take(self.config.elitism_count) {
            next.push(elite.clone());
        }

        let parents = ranked.individuals();
        while next.len() < size {
            let parent1 = &parents[selection.select(parents, minimize, rng)];
            let parent2 = &parents[selection.select(parents, minimize, rng)];

            let mut child = crossover.crossover(&parent1.genome, &parent2.genome, rng);
            mutation.mutate(&mut child, &self.config.bounds, rng);
            next.push(Individual::evaluated(child, self.fitness.as_ref()));
        }

        self.population = next;
        self.generation += 1;

        if let Some(best) = self.population.best(minimize) {
            debug!(
                "generation {}: best fitness {} at {:?}",
                self.generation,
                best.fitness,
                best.genes()
            );
        }
        Ok(())
    }

    /// Best individual under the active direction (first found wins ties)
    pub fn best(&self) -> EvoResult<Individual> {
        self.population
            .best(self.config.minimize)
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)
    }

    /// Copy of the current population
    pub fn population(&self) -> Vec<Individual> {
        self.population.individuals().to_vec()
    }

    /// Borrow the current population
    pub fn individuals(&self) -> &[Individual] {
        self.population.individuals()
    }

    /// Replace the fitness function and re-score every individual
    pub fn set_fitness_function<F>(&mut self, fitness: F)
    where
        F: FitnessFunction + 'static,
    {
        self.fitness = Box::new(fitness);
        self.population.reevaluate(self.fitness.as_ref());
        info!(
            "fitness function replaced, re-scored {} individuals",
            self.population.len()
        );
    }

    /// Switch the optimization direction
    pub fn set_minimize(&mut self, minimize: bool) {
        if self.config.minimize == minimize {
            return;
        }
        self.config.minimize = minimize;
        self.population.reevaluate(self.fitness.as_ref());
        info!(
            "optimization direction set to {}",
            if minimize { "minimize" } else { "maximize" }
        );
    }

    /// Change the search bounds without resetting the population
    ///
    /// Genes outside the new range are clamped into it, then every
    /// individual is re-scored.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> EvoResult<()> {
        let bounds = Bounds::new(min, max)?;
        if bounds == self.config.bounds {
            return Ok(());
        }
        self.config.bounds = bounds;
        let clamped = self.population.clamp_to(&bounds);
        self.population.reevaluate(self.fitness.as_ref());
        info!(
            "bounds set to [{}, {}], {} individuals clamped",
            min, max, clamped
        );
        Ok(())
    }

    /// Change the lower bound
    pub fn set_min_x(&mut self, min: f64) -> EvoResult<()> {
        self.set_bounds(min, self.config.bounds.max)
    }

    /// Change the upper bound
    pub fn set_max_x(&mut self, max: f64) -> EvoResult<()> {
        self.set_bounds(self.config.bounds.min, max)
    }

    /// Resize the population
    ///
    /// Growing appends fresh random individuals; shrinking keeps the first
    /// `size` individuals in their current order, without re-ranking.
    pub fn set_population_size<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> EvoResult<()> {
        if size == 0 {
            return Err(EvolutionError::config("population_size must be > 0"));
        }
        if size < self.config.elitism_count {
            return Err(EvolutionError::config(format!(
                "population_size ({}) must be >= elitism_count ({})",
                size, self.config.elitism_count
            )));
        }

        let old = self.config.population_size;
        self.config.population_size = size;

        if self.population.is_empty() {
            return Ok(());
        }
        let current = self.population.len();
        if size > current {
            self.population.extend_random(
                size - current,
                self.config.gene_length,
                &self.config.bounds,
                self.fitness.as_ref(),
                rng,
            );
        } else {
            self.population.truncate(size);
        }
        info!("population resized from {} to {}", old, size);
        Ok(())
    }

    /// Change the per-gene mutation probability; applies from the next generation
    pub fn set_mutation_rate(&mut self, rate: f64) -> EvoResult<()> {
        validate_rate("mutation_rate", rate)?;
        self.config.mutation_rate = rate;
        Ok(())
    }

    /// Change the crossover probability; applies from the next generation
    pub fn set_crossover_rate(&mut self, rate: f64) -> EvoResult<()> {
        validate_rate("crossover_rate", rate)?;
        self.config.crossover_rate = rate;
        Ok(())
    }

    /// Change the elite count; applies from the next generation
    pub fn set_elitism_count(&mut self, count: usize) -> EvoResult<()> {
        if count > self.config.population_size {
            return Err(EvolutionError::config(format!(
                "elitism_count ({}) must be <= population_size ({})",
                count, self.config.population_size
            )));
        }
        self.config.elitism_count = count;
        Ok(())
    }

    /// Serializable copy of configuration and population
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::new(self.generation, self.config.clone(), self.population())
    }

    /// Rebuild an engine from a snapshot
    ///
    /// Stored fitness values are discarded; every individual is re-scored
    /// with `fitness`.
    pub fn restore<F>(snapshot: EngineSnapshot, fitness: F) -> EvoResult<Self>
    where
        F: FitnessFunction + 'static,
    {
        if !snapshot.is_compatible() {
            return Err(EvolutionError::Snapshot(format!(
                "snapshot version {} is newer than supported",
                snapshot.version
            )));
        }

        let mut engine = Self::new(snapshot.config, fitness)?;
        let config = &engine.config;

        if !snapshot.population.is_empty() && snapshot.population.len() != config.population_size {
            return Err(EvolutionError::Snapshot(format!(
                "population has {} individuals, config expects {}",
                snapshot.population.len(),
                config.population_size
            )));
        }
        for individual in &snapshot.population {
            if individual.genome.dimension() != config.gene_length {
                return Err(EvolutionError::DimensionMismatch {
                    expected: config.gene_length,
                    actual: individual.genome.dimension(),
                });
            }
            if !individual.genome.is_within(&config.bounds) {
                return Err(EvolutionError::Snapshot(format!(
                    "genome {:?} lies outside [{}, {}]",
                    individual.genes(),
                    config.bounds.min,
                    config.bounds.max
                )));
            }
        }

        let mut population = Population::from_individuals(snapshot.population);
        population.reevaluate(engine.fitness.as_ref());
        engine.population = population;
        engine.generation = snapshot.generation;
        Ok(engine)
    }
}
