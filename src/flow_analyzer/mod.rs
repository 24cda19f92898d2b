pub mod data_generator;
pub mod predictive_model;

// Re-export the items used by the analyzer
pub use data_generator::{CongestionSource, DataGenerator, PerElementSource, UniformBatchSource};
pub use predictive_model::{predict_congestion, summarize_congestion_levels};
