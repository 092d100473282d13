//! Simulation utilities and program loading.
//!
//! Provides the image loader used to pre-populate memory and the
//! `Simulator` that applies a configured reset policy to a core.

/// Image loading into core memory.
pub mod loader;

/// Configured simulator wrapper around a core.
pub mod simulator;

pub use simulator::Simulator;
