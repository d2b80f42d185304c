//! Cadence arithmetic over frame time series.

use crate::report::DeviationStats;

/// Consecutive differences of an ordered time sequence.
///
/// The result is one element shorter than the input; an input with fewer
/// than two elements yields an empty sequence.
pub fn consecutive_deltas(times: &[f64]) -> Vec<f64> {
    times.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Aggregate frame-time deltas against the expected frame period.
///
/// Returns `None` for an empty delta sequence. `expected_period` must be
/// nonzero; the analyzer rejects degenerate settings before getting here.
pub fn deviation_from_deltas(deltas: &[f64], expected_period: f64) -> Option<DeviationStats> {
    if deltas.is_empty() {
        return None;
    }

    let n = deltas.len() as f64;
    let mean_signed_seconds: f64 =
        deltas.iter().map(|delta| delta - expected_period).sum::<f64>() / n;
    let mean_abs_seconds: f64 =
        deltas.iter().map(|delta| (delta - expected_period).abs()).sum::<f64>() / n;

    Some(DeviationStats {
        mean_abs_fraction: mean_abs_seconds / expected_period,
        mean_signed_fraction: mean_signed_seconds / expected_period,
        mean_signed_seconds,
    })
}
