//! Cycle-stepped model of a small synchronous RV32 core.
//!
//! This crate models a five-element clocked datapath wired into a ring:
//! 1. **Core:** Program counter, registered decoder, register file, registered
//!    ALU/branch unit, unified memory and writeback, stepped by a two-phase tick.
//! 2. **ISA:** Field extraction, decoding and disassembly for the recognised subset.
//! 3. **Simulation:** Image loader, configuration, reset sequencing and statistics.
//!
//! Every clocked element samples state as it stood before the edge; see
//! [`core::cpu::execution`] for the evaluate/commit discipline.
//!
//! # Examples
//!
//! ```
//! use ringcore::Core;
//! use ringcore::sim::loader;
//!
//! // add x3, x1, x2
//! let add = 0x0020_81B3;
//! let mut core = Core::new();
//! loader::load_program(&mut core, &[add]).unwrap();
//! core.load_register(1, 5).unwrap();
//! core.load_register(2, 3).unwrap();
//!
//! // fetch, decode, execute
//! core.run(3);
//! assert_eq!(core.peek_result(), 8);
//! ```

/// Common types and constants (word type, errors, register file).
pub mod common;
/// Configuration (defaults, reset policy, run bounds).
pub mod config;
/// Core (clocked stages, functional units, clock driver).
pub mod core;
/// Instruction set (field extraction, decode, disassembly).
pub mod isa;
/// Image loader and configured simulator.
pub mod sim;
/// Activity counters.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The core; owns every clocked element.
pub use crate::core::Core;
/// Configured simulator around a core.
pub use crate::sim::Simulator;
