use serde::{Deserialize, Serialize};

/// Summary of one latency file. Everything except `count` is in milliseconds,
/// rounded to two decimal places. Field order is the serialised key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub p99: f64,
}
