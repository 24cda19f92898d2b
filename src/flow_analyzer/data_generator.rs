use crate::error::{AnalyzerError, Result};
use crate::global_variables::{MAX_CONGESTION, MIN_CONGESTION};

use rand::distr::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::Rng;

/// A way of drawing a batch of congestion samples.
pub trait CongestionSource {
    fn name(&self) -> &'static str;
    fn sample(&self, rng: &mut SmallRng, count: usize) -> Result<Vec<u32>>;
}

/// Draws the whole batch from a single uniform distribution.
#[derive(Debug, Clone, Copy)]
pub struct UniformBatchSource {
    pub low: u32,
    pub high: u32,
}

impl UniformBatchSource {
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

impl Default for UniformBatchSource {
    fn default() -> Self {
        Self::new(MIN_CONGESTION, MAX_CONGESTION)
    }
}

impl CongestionSource for UniformBatchSource {
    fn name(&self) -> &'static str {
        "uniform-batch"
    }

    fn sample(&self, rng: &mut SmallRng, count: usize) -> Result<Vec<u32>> {
        let dist = Uniform::new_inclusive(self.low, self.high).map_err(|e| {
            AnalyzerError::Generation(format!(
                "invalid congestion range {}..={}: {}",
                self.low, self.high, e
            ))
        })?;
        Ok(dist.sample_iter(&mut *rng).take(count).collect())
    }
}

/// One independent draw per sample over the standard congestion range.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerElementSource;

impl PerElementSource {
    pub fn draw(&self, rng: &mut SmallRng, count: usize) -> Vec<u32> {
        (0..count)
            .map(|_| rng.random_range(MIN_CONGESTION..=MAX_CONGESTION))
            .collect()
    }
}

impl CongestionSource for PerElementSource {
    fn name(&self) -> &'static str {
        "per-element"
    }

    fn sample(&self, rng: &mut SmallRng, count: usize) -> Result<Vec<u32>> {
        Ok(self.draw(rng, count))
    }
}

/// Produces congestion samples, masking any failure of the primary source
/// with the per-element fallback.
pub struct DataGenerator {
    primary: Box<dyn CongestionSource>,
    fallback: PerElementSource,
}

impl DataGenerator {
    pub fn new(primary: Box<dyn CongestionSource>) -> Self {
        Self {
            primary,
            fallback: PerElementSource,
        }
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Always returns exactly `count` values in `MIN_CONGESTION..=MAX_CONGESTION`.
    pub fn generate(&self, rng: &mut SmallRng, count: usize) -> Vec<u32> {
        match self
            .primary
            .sample(rng, count)
            .and_then(|batch| validate_batch(batch, count))
        {
            Ok(batch) => {
                log::debug!(
                    "Generated {} congestion samples with '{}' source",
                    batch.len(),
                    self.primary.name()
                );
                batch
            }
            Err(e) => {
                log::warn!(
                    "Error generating traffic data with '{}' source: {}. Falling back to '{}'",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.draw(rng, count)
            }
        }
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(Box::new(UniformBatchSource::default()))
    }
}

fn validate_batch(batch: Vec<u32>, expected: usize) -> Result<Vec<u32>> {
    if batch.len() != expected {
        return Err(AnalyzerError::Generation(format!(
            "expected {} samples, source returned {}",
            expected,
            batch.len()
        )));
    }
    if let Some(bad) = batch
        .iter()
        .find(|v| !(MIN_CONGESTION..=MAX_CONGESTION).contains(*v))
    {
        return Err(AnalyzerError::Generation(format!(
            "sample {} outside {}..={}",
            bad, MIN_CONGESTION, MAX_CONGESTION
        )));
    }
    Ok(batch)
}
