use bangalore_traffic::flow_analyzer::{
    CongestionSource, DataGenerator, PerElementSource, UniformBatchSource,
};
use bangalore_traffic::global_variables::{MAX_CONGESTION, MIN_CONGESTION};
use bangalore_traffic::{AnalyzerError, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn assert_in_range(values: &[u32]) {
    for &v in values {
        assert!(
            (MIN_CONGESTION..=MAX_CONGESTION).contains(&v),
            "value {} out of range",
            v
        );
    }
}

/// Source that always fails.
struct BrokenSource;

impl CongestionSource for BrokenSource {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn sample(&self, _rng: &mut SmallRng, _count: usize) -> Result<Vec<u32>> {
        Err(AnalyzerError::Generation("numeric backend unavailable".to_string()))
    }
}

/// Source that drops one sample and emits out-of-range values.
struct ShortSource;

impl CongestionSource for ShortSource {
    fn name(&self) -> &'static str {
        "short"
    }

    fn sample(&self, _rng: &mut SmallRng, count: usize) -> Result<Vec<u32>> {
        Ok(vec![150; count.saturating_sub(1)])
    }
}

#[test]
fn test_generate_returns_requested_count_in_range() {
    let generator = DataGenerator::default();
    let mut rng = SmallRng::seed_from_u64(7);
    for n in [0usize, 1, 3, 10, 15, 500] {
        let data = generator.generate(&mut rng, n);
        assert_eq!(data.len(), n);
        assert_in_range(&data);
    }
}

#[test]
fn test_both_sources_share_the_same_contract() {
    let mut rng = SmallRng::seed_from_u64(11);
    let batch = UniformBatchSource::default().sample(&mut rng, 200).unwrap();
    let per_element = PerElementSource.sample(&mut rng, 200).unwrap();
    assert_eq!(batch.len(), 200);
    assert_eq!(per_element.len(), 200);
    assert_in_range(&batch);
    assert_in_range(&per_element);
}

#[test]
fn test_full_range_is_reachable() {
    let mut rng = SmallRng::seed_from_u64(3);
    let data = DataGenerator::default().generate(&mut rng, 5000);
    assert!(data.contains(&MIN_CONGESTION));
    assert!(data.contains(&MAX_CONGESTION));
}

#[test]
fn test_failing_primary_falls_back() {
    let generator = DataGenerator::new(Box::new(BrokenSource));
    assert_eq!(generator.primary_name(), "broken");
    let mut rng = SmallRng::seed_from_u64(5);
    let data = generator.generate(&mut rng, 10);
    assert_eq!(data.len(), 10);
    assert_in_range(&data);
}

#[test]
fn test_invalid_primary_output_falls_back() {
    let generator = DataGenerator::new(Box::new(ShortSource));
    let mut rng = SmallRng::seed_from_u64(5);
    let data = generator.generate(&mut rng, 8);
    assert_eq!(data.len(), 8);
    assert_in_range(&data);
}

#[test]
fn test_inverted_bounds_fall_back() {
    let generator = DataGenerator::new(Box::new(UniformBatchSource::new(80, 40)));
    let mut rng = SmallRng::seed_from_u64(9);
    let data = generator.generate(&mut rng, 12);
    assert_eq!(data.len(), 12);
    assert_in_range(&data);
}

#[test]
fn test_same_seed_same_samples() {
    let generator = DataGenerator::default();
    let a = generator.generate(&mut SmallRng::seed_from_u64(42), 10);
    let b = generator.generate(&mut SmallRng::seed_from_u64(42), 10);
    assert_eq!(a, b);
}
