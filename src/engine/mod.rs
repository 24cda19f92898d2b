pub mod analyzer;

pub use analyzer::{AnalyzerConfig, BangaloreTrafficAnalyzer};
