//! telemetry/snapshot.rs
//!
//! Immutable statistics snapshot handed out by `CompressionSession::stats`.
//! Serializes with camelCase keys so it can be emitted as JSON unchanged.
use std::time::Duration;

use serde::Serialize;

use crate::telemetry::counters::SessionCounters;
use crate::telemetry::timers::Stage;

/// Ratio reported before any byte has been processed.
pub const EMPTY_RATIO: f64 = 1.0;

/// `compressed / original`, or `EMPTY_RATIO` when nothing has been processed.
pub fn compression_ratio(original: u64, compressed: u64) -> f64 {
    if original > 0 {
        compressed as f64 / original as f64
    } else {
        EMPTY_RATIO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub original_size: u64,
    pub compressed_size: u64,
    pub compression_ratio: f64,
    pub compression_time_seconds: f64,
    pub compress_time_seconds: f64,
    pub decompress_time_seconds: f64,
    pub compress_calls: u64,
    pub decompress_calls: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SessionStats {
    pub fn from_counters(counters: &SessionCounters) -> Self {
        let elapsed = counters.elapsed();
        Self {
            original_size: counters.bytes_original,
            compressed_size: counters.bytes_compressed,
            compression_ratio: compression_ratio(counters.bytes_original, counters.bytes_compressed),
            compression_time_seconds: elapsed.as_secs_f64(),
            compress_time_seconds: counters.stage_times.get(Stage::Compress).as_secs_f64(),
            decompress_time_seconds: counters.stage_times.get(Stage::Decompress).as_secs_f64(),
            compress_calls: counters.compress_calls,
            decompress_calls: counters.decompress_calls,
            elapsed,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
