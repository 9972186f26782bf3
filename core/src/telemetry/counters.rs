//! telemetry/counters.rs
//! Mutable counters collected around codec calls.
//!
//! Converted into an immutable `CodecSnapshot` when the caller is done.
use bincode::{Encode, Decode};
use std::ops::AddAssign;

use crate::types::ErrorCategory;

#[derive(Default, Clone, Debug, Encode, Decode, PartialEq, Eq)]
pub struct CodecCounters {
    pub values_encoded: u64,
    pub values_decoded: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,

    // Failures by category.
    pub invalid_argument: u64,
    pub length_mismatch: u64,
    pub malformed: u64,
    pub invalid_status_code: u64,
    pub out_of_range: u64,
}

impl CodecCounters {
    /// Record one successful encode producing `len` bytes.
    pub fn record_encode(&mut self, len: usize) {
        self.values_encoded += 1;
        self.bytes_encoded += len as u64;
    }

    /// Record one successful decode consuming `len` bytes.
    pub fn record_decode(&mut self, len: usize) {
        self.values_decoded += 1;
        self.bytes_decoded += len as u64;
    }

    pub fn record_failure(&mut self, category: ErrorCategory) {
        match category {
            ErrorCategory::InvalidArgument   => self.invalid_argument += 1,
            ErrorCategory::LengthMismatch    => self.length_mismatch += 1,
            ErrorCategory::Malformed         => self.malformed += 1,
            ErrorCategory::InvalidStatusCode => self.invalid_status_code += 1,
            ErrorCategory::OutOfRange        => self.out_of_range += 1,
        }
    }

    pub fn failures(&self) -> u64 {
        self.invalid_argument
            + self.length_mismatch
            + self.malformed
            + self.invalid_status_code
            + self.out_of_range
    }

    /// Failures raised while parsing bytes.
    pub fn decode_failures(&self) -> u64 {
        self.failures() - self.invalid_argument
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.values_encoded += other.values_encoded;
        self.values_decoded += other.values_decoded;
        self.bytes_encoded += other.bytes_encoded;
        self.bytes_decoded += other.bytes_decoded;

        self.invalid_argument += other.invalid_argument;
        self.length_mismatch += other.length_mismatch;
        self.malformed += other.malformed;
        self.invalid_status_code += other.invalid_status_code;
        self.out_of_range += other.out_of_range;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
