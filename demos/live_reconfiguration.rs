//! Live Reconfiguration
//!
//! This demo drives a session tick by tick and changes its parameters
//! mid-run the way an interactive front end would: resizing the
//! population, narrowing the bounds, flipping the optimization direction
//! and swapping the fitness function, all without restarting evolution.
//! A snapshot of the final state is printed as JSON.

use evo_viz_engine::prelude::*;

fn run_ticks(session: &mut Session, ticks: usize) -> Result<(), EvolutionError> {
    // A new landscape starts a fresh convergence window
    session.clear_convergence();
    session.start()?;
    for _ in 0..ticks {
        match session.tick()? {
            StepResult::Converged {
                generation,
                best_fitness,
            } => {
                println!(
                    "  converged at gen {} (best {:.6})",
                    generation, best_fitness
                );
                break;
            }
            StepResult::Idle => break,
            StepResult::Advanced { .. } => {}
        }
    }
    if let Some(stats) = session.last_stats() {
        println!("  {}", stats);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Live Reconfiguration ===\n");

    let engine = EvolutionEngine::builder()
        .population_size(40)
        .build(WavyRamp::new())?;
    let mut session = Session::new(engine, Some(7));
    session.reset(0.0, 5.0)?;

    println!("Phase 1: maximize wavy ramp on [0, 5]");
    run_ticks(&mut session, 25)?;

    println!("\nPhase 2: grow population to 120 and raise mutation");
    session.resize_population(120)?;
    session.engine_mut().set_mutation_rate(0.2)?;
    run_ticks(&mut session, 25)?;

    println!("\nPhase 3: narrow bounds to [1, 2]");
    session.engine_mut().set_bounds(1.0, 2.0)?;
    run_ticks(&mut session, 25)?;

    println!("\nPhase 4: minimize instead");
    session.engine_mut().set_minimize(true);
    run_ticks(&mut session, 25)?;

    println!("\nPhase 5: swap in a parabola centred at 1.5");
    session
        .engine_mut()
        .set_fitness_function(|genes: &[f64]| (genes[0] - 1.5).powi(2));
    run_ticks(&mut session, 50)?;

    let best = session.engine().best()?;
    println!(
        "\nFinal best: x = {:.6}, fitness = {:.6}",
        best.genes()[0],
        best.fitness
    );

    let snapshot = session.engine().snapshot();
    println!("\nSnapshot ({} individuals):", snapshot.population.len());
    let json = snapshot.to_json_pretty()?;
    for line in json.lines().take(20) {
        println!("  {}", line);
    }

    Ok(())
}
