//! # Unit Components
//!
//! Fine-grained tests organised the same way as the crate: shared types,
//! the clocked core, the instruction set and the simulation layer.

/// Register file behaviour.
pub mod common;
