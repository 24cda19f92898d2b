use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use bangalore_traffic::flow_analyzer::{predict_congestion, DataGenerator, UniformBatchSource};
use bangalore_traffic::monitoring::build_traffic_map;

/// Deterministic congestion series cycling through 40..=80.
fn generate_dummy_congestion_batch(batch_size: usize) -> Vec<u32> {
    (0..batch_size).map(|i| 40 + (i % 41) as u32).collect()
}

/// Benchmarks sample generation (primary and fallback path), prediction and
/// map building for different batch sizes.
fn bench_batch_traffic_data(c: &mut Criterion) {
    let batch_sizes = [10, 100, 1000];

    let mut group = c.benchmark_group("Traffic_Analyzer_Batch_Benchmarks");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    let generator = DataGenerator::default();
    // Inverted bounds force every call through the fallback source.
    let fallback_generator = DataGenerator::new(Box::new(UniformBatchSource::new(80, 40)));

    for &batch in batch_sizes.iter() {
        let data = generate_dummy_congestion_batch(batch);

        group.bench_with_input(BenchmarkId::new("generate", batch), &batch, |b, &n| {
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| black_box(generator.generate(&mut rng, black_box(n))));
        });

        group.bench_with_input(
            BenchmarkId::new("generate_fallback", batch),
            &batch,
            |b, &n| {
                let mut rng = SmallRng::seed_from_u64(1);
                b.iter(|| black_box(fallback_generator.generate(&mut rng, black_box(n))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("predict_congestion", batch),
            &batch,
            |b, &_batch| {
                b.iter(|| black_box(predict_congestion(black_box(&data), black_box(3))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("build_traffic_map", batch),
            &batch,
            |b, &_batch| {
                let mut rng = SmallRng::seed_from_u64(1);
                b.iter(|| black_box(build_traffic_map(black_box(&data), 60.0, &mut rng)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_batch_traffic_data);
criterion_main!(benches);
