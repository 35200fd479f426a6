//! Error types for latency analysis.

use std::path::PathBuf;

/// Errors that can occur while loading or analysing latency samples.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The latency file could not be opened or read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line is not a finite decimal number.
    #[error("line {line}: invalid latency value {value:?}")]
    Parse { line: usize, value: String },

    /// A pre-parsed sample is NaN or infinite. `index` is its position in the input.
    #[error("sample {index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },

    /// A statistic does not fit in an `f64` once converted to milliseconds.
    #[error("{field} is out of range when converted to milliseconds")]
    OutOfRange { field: &'static str },

    /// Nothing left to analyse after blank lines were dropped.
    #[error("no latency samples found")]
    EmptyData,
}
