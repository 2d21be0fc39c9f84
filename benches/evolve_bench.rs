//! Criterion benchmarks for the GA runner on both genome models.
//!
//! Runs are seeded so every iteration does the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::ga::{GaConfig, GaRunner};
use u_evolve::random::create_rng;
use u_evolve::schedule::{evaluate_schedule, ScheduleDomain, ScheduleProblem};
use u_evolve::tsp::TspProblem;

// ===========================================================================
// TSP
// ===========================================================================

fn bench_ga_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for (cities, pop, gen) in [(10usize, 100usize, 100usize), (30, 100, 50), (100, 100, 20)] {
        let mut rng = create_rng(7);
        let Ok(problem) = TspProblem::random(cities, &mut rng) else {
            continue;
        };
        let config = GaConfig::tsp()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{cities}_p{pop}_g{gen}"), cities),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Schedule
// ===========================================================================

fn bench_ga_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_schedule");
    group.sample_size(10);

    let Ok(problem) = ScheduleProblem::new(ScheduleDomain::school_week()) else {
        return;
    };
    for pop in [50usize, 200] {
        let config = GaConfig::schedule()
            .with_population_size(pop)
            .with_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, c| {
            b.iter(|| {
                let result = GaRunner::run(black_box(&problem), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_schedule_fitness(c: &mut Criterion) {
    use u_evolve::ga::GaProblem;

    let domain = ScheduleDomain::school_week();
    let Ok(problem) = ScheduleProblem::new(domain.clone()) else {
        return;
    };
    let mut rng = create_rng(42);
    let schedule = problem.create_genome(&mut rng);

    c.bench_function("evaluate_schedule", |b| {
        b.iter(|| black_box(evaluate_schedule(black_box(&domain), black_box(&schedule))))
    });
}

criterion_group!(benches, bench_ga_tsp, bench_ga_schedule, bench_schedule_fitness);
criterion_main!(benches);
