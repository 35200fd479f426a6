//! Text summary builder for CLI output.
//!
//! Formats a computed `LatencyStats` into human-readable lines for text mode.

use crate::model::LatencyStats;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from computed latency statistics.
pub(crate) fn build_text_summary(stats: &LatencyStats) -> TextSummary {
    let lines = vec![
        format!("Samples: {}", stats.count),
        format!(
            "Latency: min {:.2} max {:.2} avg {:.2} ms",
            stats.min, stats.max, stats.mean
        ),
        format!(
            "Percentiles: p50 {:.2} p95 {:.2} p99 {:.2} ms",
            stats.median, stats.p95, stats.p99
        ),
    ];
    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary_lines() {
        let stats = LatencyStats {
            count: 4,
            min: 10.0,
            max: 40.0,
            mean: 25.0,
            median: 30.0,
            p95: 40.0,
            p99: 40.5,
        };
        let summary = build_text_summary(&stats);
        assert_eq!(
            summary.lines,
            vec![
                "Samples: 4".to_string(),
                "Latency: min 10.00 max 40.00 avg 25.00 ms".to_string(),
                "Percentiles: p50 30.00 p95 40.00 p99 40.50 ms".to_string(),
            ]
        );
    }
}
