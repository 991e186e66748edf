//! telemetry/counters.rs
//! Mutable counters owned by one session.
//!
//! Summary: Collects byte counts, call counts and stage time across every
//! successful compress/decompress call. Converted into an immutable
//! `SessionStats` on request.
use std::time::Duration;

use crate::telemetry::timers::{Stage, StageTimes};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct SessionCounters {
    pub compress_calls: u64,
    pub decompress_calls: u64,
    /// Uncompressed side of every call.
    pub bytes_original: u64,
    /// Compressed side of every call.
    pub bytes_compressed: u64,
    pub stage_times: StageTimes,
}

impl SessionCounters {
    /// Record one successful call.
    ///
    /// - `original_len`: uncompressed bytes (input of compress, output of decompress)
    /// - `compressed_len`: compressed bytes (output of compress, input of decompress)
    /// - `dur`: wall-clock time spent in the codec
    pub fn accumulate(&mut self, stage: Stage, original_len: usize, compressed_len: usize, dur: Duration) {
        match stage {
            Stage::Compress => self.compress_calls += 1,
            Stage::Decompress => self.decompress_calls += 1,
        }
        self.bytes_original = self.bytes_original.saturating_add(original_len as u64);
        self.bytes_compressed = self.bytes_compressed.saturating_add(compressed_len as u64);
        self.stage_times.add(stage, dur);
    }

    /// Total processing time across both directions.
    pub fn elapsed(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn calls(&self) -> u64 {
        self.compress_calls + self.decompress_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompress_counts_output_as_original() {
        let mut c = SessionCounters::default();
        c.accumulate(Stage::Decompress, 100, 20, Duration::from_micros(10));

        assert_eq!(c.bytes_original, 100);
        assert_eq!(c.bytes_compressed, 20);
        assert_eq!(c.decompress_calls, 1);
        assert_eq!(c.compress_calls, 0);
    }

    #[test]
    fn durations_are_totals_not_averages() {
        let mut c = SessionCounters::default();
        c.accumulate(Stage::Compress, 10, 5, Duration::from_millis(2));
        c.accumulate(Stage::Compress, 10, 5, Duration::from_millis(2));
        c.accumulate(Stage::Decompress, 10, 5, Duration::from_millis(1));

        assert_eq!(c.elapsed(), Duration::from_millis(5));
        assert_eq!(c.calls(), 3);
    }
}
