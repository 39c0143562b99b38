//! Criterion benchmarks for the GA and ACO solvers.
//!
//! Instances are cities on a circle, so the optimum is known and every
//! size has the same geometry.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::aco::{AcoConfig, AcoRunner};
use u_tsp::distance::{DistanceMatrix, Metric};
use u_tsp::ga::{GaConfig, GaRunner};
use u_tsp::tour::TourProblem;

fn circle(n: usize) -> DistanceMatrix {
    let pts: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            (angle.cos() * 100.0, angle.sin() * 100.0)
        })
        .collect();
    DistanceMatrix::from_points(&pts, Metric::Euclidean).unwrap()
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_circle");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 50usize, 50usize), (30, 100, 50), (60, 100, 30)] {
        let dm = circle(n);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(dm, config),
            |b, (dm, c)| {
                let problem = TourProblem::new(dm, dm.size()).unwrap();
                b.iter(|| black_box(GaRunner::run(black_box(&problem), black_box(c))))
            },
        );
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_circle");
    group.sample_size(10);

    for &n in &[10usize, 30, 60] {
        let dm = circle(n);
        let config = AcoConfig::default()
            .with_ant_count(20)
            .with_max_iterations(30)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(dm, config), |b, (dm, c)| {
            let problem = TourProblem::new(dm, dm.size()).unwrap();
            b.iter(|| black_box(AcoRunner::run(black_box(&problem), black_box(c))))
        });
    }
    group.finish();
}

fn bench_aco_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_construction");
    group.sample_size(10);

    let dm = circle(40);
    let problem = TourProblem::new(&dm, 40).unwrap();
    for parallel in [false, true] {
        let config = AcoConfig::default()
            .with_ant_count(40)
            .with_max_iterations(10)
            .with_parallel(parallel)
            .with_seed(7);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(AcoRunner::run(black_box(&problem), black_box(&config))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga, bench_aco, bench_aco_sequential_vs_parallel);
criterion_main!(benches);
