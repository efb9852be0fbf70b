use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

use gravwell::physics::{BodySet, ConfigRanges, ForceSolver, RandomBodyGenerator};

/// Seeded bodies drawn from the default ranges, so every run solves the same set
fn generate_test_bodies(count: usize, seed: u64) -> BodySet {
    let generator = RandomBodyGenerator::from_ranges(&ConfigRanges::default());
    generator.generate(count, &mut ChaCha8Rng::seed_from_u64(seed))
}

fn benchmark_force_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_solve");
    let solver = ForceSolver::from_ranges(&ConfigRanges::default());

    for &body_count in &[2, 10, 50, 100, 500, 1000] {
        let bodies = generate_test_bodies(body_count, 42);
        group.throughput(Throughput::Elements((body_count * body_count) as u64));

        group.bench_with_input(
            BenchmarkId::new("direct_sum", body_count),
            &bodies,
            |b, bodies| b.iter(|| black_box(solver.compute(black_box(bodies), false))),
        );

        // Default ranges rarely produce a close pair, so this is the full scan plus distance checks
        group.bench_with_input(
            BenchmarkId::new("direct_sum_with_detection", body_count),
            &bodies,
            |b, bodies| b.iter(|| black_box(solver.compute(black_box(bodies), true))),
        );
    }

    group.finish();
}

fn benchmark_potential_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("potential_energy");
    let solver = ForceSolver::from_ranges(&ConfigRanges::default());

    for &body_count in &[10, 100, 1000] {
        let bodies = generate_test_bodies(body_count, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(body_count),
            &bodies,
            |b, bodies| b.iter(|| black_box(solver.potential_energy(black_box(bodies)))),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_force_solve, benchmark_potential_energy);
criterion_main!(benches);
