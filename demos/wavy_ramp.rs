//! Wavy Ramp Optimization
//!
//! This demo evolves a single gene on [0, 5] to maximize
//! `f(x) = x * sin(10x) + x * cos(2x)`, printing per-generation statistics
//! until the best fitness stops moving.
//!
//! Run with `RUST_LOG=debug` to see every generation logged by the engine.

use evo_viz_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Wavy Ramp Optimization ===\n");

    let fitness = WavyRamp::new();
    let (min, max) = fitness.bounds();

    let engine = EvolutionEngine::builder()
        .population_size(50)
        .mutation_rate(0.05)
        .crossover_rate(0.5)
        .elitism_count(2)
        .gene_length(1)
        .build(fitness)?;

    // Seeded for reproducibility
    let mut session = Session::new(engine, Some(42));
    session.reset(min, max)?;
    session.start()?;

    loop {
        let step = session.tick()?;
        if let Some(stats) = session.last_stats() {
            if stats.generation % 10 == 0 {
                println!("{}", stats);
            }
        }
        match step {
            StepResult::Advanced { generation, .. } if generation >= 500 => break,
            StepResult::Advanced { .. } => {}
            StepResult::Converged { generation, .. } => {
                println!("\nConverged at generation {}", generation);
                break;
            }
            StepResult::Idle => break,
        }
    }
    session.stop();

    let best = session.engine().best()?;
    println!("\nOptimization complete!");
    println!("  Generations:  {}", session.generation());
    println!("  Best x:       {:.6}", best.genes()[0]);
    println!("  Best fitness: {:.6}", best.fitness);

    // The global maximum on [0, 5] is roughly 6.4 near x = 3.3
    println!("\nBest fitness history:");
    for (generation, value) in session
        .best_fitness_history()
        .iter()
        .enumerate()
        .step_by(10)
    {
        println!("  gen {:>4}: {:.6}", generation, value);
    }

    Ok(())
}
