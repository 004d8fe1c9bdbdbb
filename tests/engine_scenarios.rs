//! End-to-end scenarios for the evolution engine and session driver

use approx::assert_relative_eq;
use evo_viz_engine::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn identity(genes: &[f64]) -> f64 {
    genes[0]
}

fn gene_values(individuals: &[Individual]) -> Vec<f64> {
    individuals.iter().map(|i| i.genes()[0]).collect()
}

#[test]
fn small_identity_scenario() {
    let config = EngineConfig {
        population_size: 4,
        mutation_rate: 0.0,
        crossover_rate: 1.0,
        elitism_count: 1,
        gene_length: 1,
        bounds: Bounds::unit(),
        minimize: false,
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = EvolutionEngine::new(config, identity).unwrap();
    engine.initialize_population(0.0, 1.0, &mut rng).unwrap();

    let initial = gene_values(engine.individuals());
    let max = initial.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let best = engine.best().unwrap();
    assert_eq!(best.genes()[0], max);
    assert_eq!(best.fitness, max);

    engine.evolve(&mut rng).unwrap();
    let next = gene_values(engine.individuals());

    assert_eq!(next.len(), 4);
    assert!(next.contains(&max), "elite {} missing from {:?}", max, next);
    for value in &next {
        assert!(
            initial.contains(value),
            "offspring value {} not inherited from {:?}",
            value,
            initial
        );
    }
}

#[test]
fn resize_keeps_prefix() {
    let config = EngineConfig {
        population_size: 10,
        ..EngineConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(10);
    let mut engine = EvolutionEngine::new(config, identity).unwrap();
    engine.initialize_population(0.0, 1.0, &mut rng).unwrap();
    let original: Vec<Individual> = engine.population();

    engine.set_population_size(15, &mut rng).unwrap();
    let grown = engine.population();
    assert_eq!(grown.len(), 15);
    assert_eq!(&grown[..10], &original[..]);

    engine.set_population_size(7, &mut rng).unwrap();
    assert_eq!(engine.population(), grown[..7].to_vec());
}

#[test]
fn constant_fitness_converges_at_generation_twenty() {
    let engine = EvolutionEngine::builder()
        .population_size(10)
        .build(Constant(0.5))
        .unwrap();
    let mut session = Session::new(engine, Some(1));
    session.reset(0.0, 1.0).unwrap();

    let summary = session.run(1000).unwrap();
    assert_eq!(summary.converged_at, Some(20));
    assert_eq!(summary.generations, 20);
    assert_eq!(summary.best.fitness, 0.5);
}

#[test]
fn minimizing_sphere_moves_towards_origin() {
    let engine = EvolutionEngine::builder()
        .population_size(60)
        .gene_length(2)
        .mutation_rate(0.2)
        .crossover_rate(0.7)
        .elitism_count(2)
        .minimize(true)
        .build(Sphere::new())
        .unwrap();
    let mut session = Session::new(engine, Some(77));
    session.reset(-5.12, 5.12).unwrap();
    let initial_best = session.best_fitness().unwrap();

    let summary = session.run(200).unwrap();
    assert!(summary.best.fitness <= initial_best);
    assert!(
        summary.best.fitness < 1.0,
        "best was {}",
        summary.best.fitness
    );
}

#[test]
fn live_reconfiguration_mid_run() {
    let engine = EvolutionEngine::builder()
        .population_size(30)
        .build(WavyRamp::new())
        .unwrap();
    let mut session = Session::new(engine, Some(3));
    session.reset(0.0, 5.0).unwrap();
    session.start().unwrap();

    for _ in 0..5 {
        session.tick().unwrap();
    }

    session.engine_mut().set_minimize(true);
    session.engine_mut().set_bounds(1.0, 4.0).unwrap();
    session.resize_population(45).unwrap();

    for _ in 0..5 {
        session.tick().unwrap();
    }

    let engine = session.engine();
    assert_eq!(engine.individuals().len(), 45);
    assert_eq!(session.generation(), 10);
    for ind in engine.individuals() {
        assert!(ind.genome.is_within(&engine.config().bounds));
        assert_eq!(ind.fitness, WavyRamp::new().evaluate_raw(ind.genes()));
    }
}

#[test]
fn snapshot_json_round_trip_restores_engine() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut engine = EvolutionEngine::builder()
        .population_size(8)
        .gene_length(3)
        .bounds(-1.0, 1.0)
        .build(Sphere::new())
        .unwrap();
    engine.initialize_population(-1.0, 1.0, &mut rng).unwrap();
    engine.evolve(&mut rng).unwrap();

    let json = engine.snapshot().to_json().unwrap();
    let snapshot = EngineSnapshot::from_json(&json).unwrap();
    let restored = EvolutionEngine::restore(snapshot, Sphere::new()).unwrap();

    assert_eq!(restored.generation(), 1);
    assert_eq!(restored.config(), engine.config());
    assert_eq!(restored.individuals().len(), 8);
    for (a, b) in restored.individuals().iter().zip(engine.individuals()) {
        for (x, y) in a.genes().iter().zip(b.genes()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
        assert_relative_eq!(a.fitness, b.fitness, epsilon = 1e-12);
    }
}

#[test]
fn panicking_evaluator_does_not_stop_evolution() {
    let engine = EvolutionEngine::builder()
        .population_size(12)
        .build(|genes: &[f64]| {
            if genes[0] > 0.9 {
                panic!("domain error");
            }
            genes[0]
        })
        .unwrap();
    let mut session = Session::new(engine, Some(8));
    session.reset(0.0, 1.0).unwrap();
    session.start().unwrap();
    for _ in 0..10 {
        session.tick().unwrap();
    }

    for ind in session.engine().individuals() {
        if ind.genes()[0] > 0.9 {
            assert_eq!(ind.fitness, FALLBACK_FITNESS);
        } else {
            assert_eq!(ind.fitness, ind.genes()[0]);
        }
    }
}
