// analyzer.rs
use crate::error::Result;
use crate::flow_analyzer::{predict_congestion, summarize_congestion_levels, DataGenerator};
use crate::global_variables::{DEFAULT_NUM_POINTS, DEFAULT_WINDOW_SIZE, OUTPUT_MAP_FILE};
use crate::monitoring::visualize_traffic;
use crate::shared_data::AnalysisReport;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub num_points: usize,
    pub window_size: usize,
    pub output_path: PathBuf,
    /// Fixed seed for reproducible samples and marker placement.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            window_size: DEFAULT_WINDOW_SIZE,
            output_path: PathBuf::from(OUTPUT_MAP_FILE),
            seed: None,
        }
    }
}

pub struct BangaloreTrafficAnalyzer {
    config: AnalyzerConfig,
    generator: DataGenerator,
    rng: SmallRng,
}

impl BangaloreTrafficAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_generator(config, DataGenerator::default())
    }

    pub fn with_generator(config: AnalyzerConfig, generator: DataGenerator) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            generator,
            rng,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn generate_traffic_data(&mut self) -> Vec<u32> {
        self.generator.generate(&mut self.rng, self.config.num_points)
    }

    pub fn predict_congestion(&self, data: &[u32]) -> f64 {
        predict_congestion(data, self.config.window_size)
    }

    /// Generate samples, predict the next value and write the map.
    pub fn run_analysis(&mut self) -> Result<AnalysisReport> {
        let samples = self.generate_traffic_data();
        let prediction = self.predict_congestion(&samples);

        let summary = summarize_congestion_levels(&samples);
        log::info!(
            "Congestion levels: {} low, {} medium, {} high",
            summary.low,
            summary.medium,
            summary.high
        );

        visualize_traffic(
            &samples,
            prediction,
            &mut self.rng,
            &self.config.output_path,
        )?;

        Ok(AnalysisReport {
            samples,
            prediction,
            summary,
            output_path: self.config.output_path.clone(),
        })
    }
}
