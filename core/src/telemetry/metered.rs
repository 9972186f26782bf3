//! telemetry/metered.rs
//! Wrapper that forwards to any serializer and records what happened.

use crate::serializer::Serializer;
use crate::telemetry::counters::CodecCounters;
use crate::telemetry::snapshot::CodecSnapshot;
use crate::telemetry::timers::{Stage, TelemetryTimer};
use crate::types::SerializationError;

/// Owns its counters; one instance per thread, merge at the end.
#[derive(Debug)]
pub struct Metered<S> {
    inner: S,
    counters: CodecCounters,
    timer: TelemetryTimer,
}

impl<S> Metered<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, counters: CodecCounters::default(), timer: TelemetryTimer::new() }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> CodecSnapshot {
        CodecSnapshot::from(&self.counters, &self.timer)
    }

    pub fn into_counters(self) -> CodecCounters {
        self.counters
    }

    pub fn to_bytes<T>(&mut self, value: &T) -> Result<Vec<u8>, SerializationError>
    where
        S: Serializer<T>,
    {
        let inner = &self.inner;
        let res = self.timer.time(Stage::Encode, || inner.to_bytes(value));
        match &res {
            Ok(bytes) => {
                self.counters.record_encode(bytes.len());
                tracing::trace!(len = bytes.len(), "encoded value");
            }
            Err(e) => {
                self.counters.record_failure(e.category());
                tracing::debug!(category = ?e.category(), error = %e, "encode failed");
            }
        }
        res
    }

    pub fn from_bytes<T>(&mut self, bytes: &[u8]) -> Result<T, SerializationError>
    where
        S: Serializer<T>,
    {
        let inner = &self.inner;
        let res = self.timer.time(Stage::Decode, || inner.from_bytes(bytes));
        match &res {
            Ok(_) => {
                self.counters.record_decode(bytes.len());
                tracing::trace!(len = bytes.len(), "decoded value");
            }
            Err(e) => {
                self.counters.record_failure(e.category());
                tracing::debug!(category = ?e.category(), error = %e, len = bytes.len(), "decode failed");
            }
        }
        res
    }
}
