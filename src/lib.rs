//! Latency sample summarisation: parse seconds-per-line input, compute
//! min/max/mean and nearest-rank percentiles in milliseconds.

pub mod cli;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod samples;
pub mod storage;
pub mod text_summary;

pub use error::AnalyzeError;
pub use metrics::{analyze_latencies, compute_latency_stats};
pub use model::LatencyStats;
pub use samples::SampleSet;
