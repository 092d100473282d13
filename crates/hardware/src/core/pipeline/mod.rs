//! Clocked datapath.
//!
//! This module contains the pieces of the core's ring. It includes the following:
//! 1. **Latches:** Registered records passed between stages.
//! 2. **Signals:** Operation codes and opcode classes.
//! 3. **Stages:** Program counter, decoder, execution unit, memory and writeback.
//! 4. **Traits:** The two-phase evaluate/commit interface every clocked element implements.

/// Registered inter-stage records.
pub mod latches;

/// Operation codes and opcode classes.
pub mod signals;

/// Clocked stage implementations.
pub mod stages;

/// Evaluate/commit interface for clocked elements.
pub mod traits;
