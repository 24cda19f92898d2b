use crate::global_variables::DEFAULT_PREDICTION;
use crate::shared_data::{CongestionLevel, CongestionSummary};

/// Predict the next congestion value as the mean of the last `window_size`
/// samples. The window is clamped to the number of samples, and a zero
/// window is treated as one. Returns `DEFAULT_PREDICTION` when `data` is empty.
pub fn predict_congestion<T>(data: &[T], window_size: usize) -> f64
where
    T: Copy + Into<f64>,
{
    if data.is_empty() {
        return DEFAULT_PREDICTION;
    }

    let window = window_size.max(1).min(data.len());
    let recent = &data[data.len() - window..];
    let sum: f64 = recent.iter().map(|&v| v.into()).sum();
    let predicted = sum / window as f64;

    log::info!(
        "[Prediction] {} samples, window = {}, predicted congestion = {:.2}",
        data.len(),
        window,
        predicted
    );

    predicted
}

/// Count how many samples fall into each congestion band.
pub fn summarize_congestion_levels(data: &[u32]) -> CongestionSummary {
    let mut summary = CongestionSummary::default();
    for &congestion in data {
        match CongestionLevel::from_value(congestion as f64) {
            CongestionLevel::Low => summary.low += 1,
            CongestionLevel::Medium => summary.medium += 1,
            CongestionLevel::High => summary.high += 1,
        }
    }
    summary
}
