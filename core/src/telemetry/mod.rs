//! telemetry/mod.rs
//! Caller-side observability for codec calls: counters, stage timers and
//! immutable snapshots.
//!
//! Notes:
//! - Codecs stay stateless; all counters live in caller-owned values.
//! - Per-thread counters are merged at the end instead of shared under a lock.
//! - `Metered` emits `tracing` events; the codecs themselves never log.

pub mod counters;
pub mod timers;
pub mod snapshot;
pub mod metered;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
pub use metered::*;
