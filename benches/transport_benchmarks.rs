//! Criterion benchmarks for the photon transport kernel.
//!
//! Benchmarks cover:
//! - Uniform batch generation (foundation of the simulation loop)
//! - Transmission estimation with varying photon counts
//! - Sequential vs parallel reduction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use photon_transport::rng::TransportRng;
use photon_transport::transport::{
    AttenuationProfile, ParallelPolicy, PhotonSimulator, TransportConfig,
};

/// Benchmark uniform batch generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("uniform_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = TransportRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_uniform(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark transmission estimation with varying photon counts.
fn bench_transmission(c: &mut Criterion) {
    let mut group = c.benchmark_group("transmission");

    let profile = AttenuationProfile::new(vec![0.5; 101], 1.0).unwrap();

    for n_photons in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("sequential", n_photons),
            &n_photons,
            |b, &n| {
                let config = TransportConfig::builder()
                    .n_photons(n)
                    .seed(42)
                    .build()
                    .unwrap();
                let mut simulator = PhotonSimulator::new(config).unwrap();
                b.iter(|| black_box(simulator.transmission(&profile)));
            },
        );
    }

    group.finish();
}

/// Benchmark the parallel reduction against the sequential path.
fn bench_parallel_transmission(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_transmission");
    group.sample_size(20);

    let profile = AttenuationProfile::new(vec![0.5; 101], 1.0).unwrap();
    let policy = ParallelPolicy::new(1);

    for n_photons in [100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("parallel", n_photons),
            &n_photons,
            |b, &n| {
                let config = TransportConfig::builder()
                    .n_photons(n)
                    .seed(42)
                    .build()
                    .unwrap();
                let mut simulator = PhotonSimulator::new(config).unwrap();
                b.iter(|| black_box(simulator.transmission_parallel(&profile, &policy)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_transmission,
    bench_parallel_transmission
);
criterion_main!(benches);
