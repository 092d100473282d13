//! Core processor implementation.
//!
//! This module contains the core's clocked datapath, the combinational
//! functional units, and the top-level `Core` that owns every component and
//! drives the two-phase tick.

/// Top-level core state and the clock driver.
pub mod cpu;

/// Clocked datapath (stages, latches, signals, traits).
pub mod pipeline;

/// Combinational functional units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Core;
