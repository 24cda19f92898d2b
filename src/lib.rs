pub mod engine;
pub mod error;
pub mod flow_analyzer;
pub mod global_variables;
pub mod monitoring;
pub mod shared_data;

pub use engine::{AnalyzerConfig, BangaloreTrafficAnalyzer};
pub use error::{AnalyzerError, Result};
