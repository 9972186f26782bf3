//! telemetry/snapshot.rs
//!
//! Immutable view of counters and timings, serializable for export.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::CodecCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub values_encoded: u64,
    pub values_decoded: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,
    pub encode_failures: u64,
    pub decode_failures: u64,
    /// Failed decodes over attempted decodes.
    pub decode_failure_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl CodecSnapshot {
    pub fn from(counters: &CodecCounters, timer: &TelemetryTimer) -> Self {
        let decode_failures = counters.decode_failures();
        let attempts = counters.values_decoded + decode_failures;
        let decode_failure_ratio = if attempts > 0 {
            decode_failures as f64 / attempts as f64
        } else {
            0.0
        };

        Self {
            values_encoded: counters.values_encoded,
            values_decoded: counters.values_decoded,
            bytes_encoded: counters.bytes_encoded,
            bytes_decoded: counters.bytes_decoded,
            encode_failures: counters.invalid_argument,
            decode_failures,
            decode_failure_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Stage timings can never exceed the wall clock they were measured in.
    pub fn sanity_check(&self) -> bool {
        self.decode_failure_ratio <= 1.0 && self.stage_times.total() <= self.elapsed
    }

    pub fn mean_encode_us(&self) -> f64 {
        if self.values_encoded == 0 {
            return 0.0;
        }
        self.stage_times.get_us(Stage::Encode) / self.values_encoded as f64
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Emit the snapshot as one structured `tracing` event.
    pub fn log_summary(&self) {
        tracing::info!(
            values_encoded = self.values_encoded,
            values_decoded = self.values_decoded,
            bytes_encoded = self.bytes_encoded,
            bytes_decoded = self.bytes_decoded,
            encode_failures = self.encode_failures,
            decode_failures = self.decode_failures,
            elapsed_us = self.elapsed.as_micros() as u64,
            "codec telemetry"
        );
    }
}
