// src/shared_data.rs

use crate::global_variables::BANGALORE_AREAS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Congestion band used to color a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub fn from_value(congestion: f64) -> Self {
        if congestion < 50.0 {
            CongestionLevel::Low
        } else if congestion < 70.0 {
            CongestionLevel::Medium
        } else {
            CongestionLevel::High
        }
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "green",
            CongestionLevel::Medium => "orange",
            CongestionLevel::High => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        }
    }
}

/// Number of samples falling into each congestion band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongestionSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// What a successful analysis run produced.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub samples: Vec<u32>,
    pub prediction: f64,
    pub summary: CongestionSummary,
    pub output_path: PathBuf,
}

/// Area name for the sample at `index`, cycling through the known areas.
pub fn area_label(index: usize) -> &'static str {
    BANGALORE_AREAS[index % BANGALORE_AREAS.len()]
}
