//! Simulation statistics collection and reporting.
//!
//! This module counts the activity of the core's clocked elements. It provides:
//! 1. **Ticks:** Total edges and edges spent with reset asserted.
//! 2. **Control:** Edges on which a taken branch signal was latched.
//! 3. **Register file:** Enabled writes versus destructive clears.
//! 4. **Memory:** Read and write edges.
//!
//! Counters are updated in the commit phase, once per edge.

use std::fmt::Write as _;

use serde::Serialize;

/// Counters describing what the core did since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoreStats {
    /// Total clock edges.
    pub ticks: u64,
    /// Edges with reset asserted.
    pub reset_ticks: u64,
    /// Edges that latched a taken branch signal.
    pub branches_taken: u64,
    /// Enabled register writes to a nonzero index.
    pub register_writes: u64,
    /// Edges on which a nonzero register slot was cleared instead of written.
    pub register_clears: u64,
    /// Memory write edges.
    pub memory_writes: u64,
    /// Memory read edges.
    pub memory_reads: u64,
}

impl CoreStats {
    /// Edges that ran with reset released.
    pub const fn active_ticks(&self) -> u64 {
        self.ticks - self.reset_ticks
    }

    /// Renders a short plain-text report.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "core.ticks               {}", self.ticks);
        let _ = writeln!(out, "core.ticks.reset         {}", self.reset_ticks);
        let _ = writeln!(out, "core.ticks.active        {}", self.active_ticks());
        let _ = writeln!(out, "core.branches_taken      {}", self.branches_taken);
        let _ = writeln!(out, "regs.writes              {}", self.register_writes);
        let _ = writeln!(out, "regs.clears              {}", self.register_clears);
        let _ = writeln!(out, "mem.reads                {}", self.memory_reads);
        let _ = writeln!(out, "mem.writes               {}", self.memory_writes);
        out
    }
}
