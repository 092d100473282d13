//! Whole-core tests: the ring wiring, reset and state capture.


/// Snapshots.
pub mod snapshot;
