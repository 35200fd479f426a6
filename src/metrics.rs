use crate::error::AnalyzeError;
use crate::model::LatencyStats;
use crate::samples::SampleSet;

/// Index of the nearest-rank percentile `p` (0..=100) in a sorted slice of length `n`.
/// The rank is truncated, not interpolated, and clamped to the last element.
pub fn percentile_index(n: usize, p: f64) -> usize {
    let idx = (n as f64 * (p / 100.0)) as usize;
    idx.min(n.saturating_sub(1))
}

/// Nearest-rank percentile of an ascending, non-empty slice.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    sorted[percentile_index(sorted.len(), p)]
}

/// Convert seconds to milliseconds rounded to two decimals (half away from zero).
pub fn to_rounded_ms(seconds: f64) -> f64 {
    (seconds * 1000.0 * 100.0).round() / 100.0
}

fn field_ms(field: &'static str, seconds: f64) -> Result<f64, AnalyzeError> {
    let ms = to_rounded_ms(seconds);
    if ms.is_finite() {
        Ok(ms)
    } else {
        Err(AnalyzeError::OutOfRange { field })
    }
}

/// Summarise a sample set. Fails if any statistic overflows in milliseconds.
pub fn compute_latency_stats(samples: &SampleSet) -> Result<LatencyStats, AnalyzeError> {
    let sorted = samples.as_sorted();
    Ok(LatencyStats {
        count: samples.len(),
        min: field_ms("min", samples.min())?,
        max: field_ms("max", samples.max())?,
        mean: field_ms("mean", samples.mean())?,
        median: field_ms("median", nearest_rank(sorted, 50.0))?,
        p95: field_ms("p95", nearest_rank(sorted, 95.0))?,
        p99: field_ms("p99", nearest_rank(sorted, 99.0))?,
    })
}

/// Parse text lines and summarise them in one step.
pub fn analyze_latencies<I, S>(lines: I) -> Result<LatencyStats, AnalyzeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let samples = SampleSet::from_lines(lines)?;
    compute_latency_stats(&samples)
}
