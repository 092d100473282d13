//! Combinational functional units.
//!
//! The execution stage registers the outputs of these units; the units
//! themselves hold no state.

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;
