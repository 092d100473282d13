//! Common utilities and types used throughout the core model.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Word type, register count, memory depth and address mask.
//! 2. **Error Handling:** The error type reported by loaders and drivers.
//! 3. **Register Management:** The clocked general-purpose register file.

/// Core-wide constants and the `Word` type.
pub mod constants;

/// Error types for loading, injection and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::Word;
pub use error::SimError;
pub use reg::RegisterFile;
