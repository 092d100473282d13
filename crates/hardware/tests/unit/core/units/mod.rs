//! Functional unit tests.

/// Operation table.
pub mod alu;
