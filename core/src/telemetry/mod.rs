//! telemetry/mod.rs
//! Per-session statistics: counters, stage timers, and immutable snapshots.
//!
//! Notes:
//! - Counters live inside the session lock and are only touched after a
//!   successful codec call.
//! - Snapshots are copies; the ratio is derived from the byte counters each
//!   time a snapshot is taken.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
