//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 architectural
//! registers. It provides:
//! 1. **Combinational Reads:** `read` never has side effects and `x0` reads zero.
//! 2. **Clocked Writes:** One write port sampled per edge through [`Clocked`].
//! 3. **Injection:** Pre-loading of register contents by an external loader.
//!
//! The write port is destructive: on an edge where the port is not enabled,
//! or where it targets `x0`, the addressed slot is cleared to zero rather
//! than left untouched. Only the addressed slot is affected.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{REG_COUNT, REG_ZERO, Word};
use crate::common::error::SimError;
use crate::core::pipeline::traits::Clocked;

/// Signals presented to the register file write port for one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegWritePort {
    /// Destination register index.
    pub index: usize,
    /// Value to store when enabled.
    pub value: Word,
    /// Write enable.
    pub enable: bool,
}

impl RegWritePort {
    /// Returns `true` if this port performs a real write to a nonzero register.
    pub const fn is_write(&self) -> bool {
        self.enable && self.index != REG_ZERO
    }
}

/// Register slot update computed in the evaluate phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegUpdate {
    /// Slot to update.
    pub index: usize,
    /// Value the slot holds after the edge.
    pub value: Word,
}

/// 32-entry register file with `x0` hardwired to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [Word; REG_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads a register. Register `x0` always returns 0.
    ///
    /// The index is masked to five bits, matching the width of the
    /// instruction fields that drive it.
    pub const fn read(&self, idx: usize) -> Word {
        let idx = idx & (REG_COUNT - 1);
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Applies one full edge of the write port.
    ///
    /// Equivalent to evaluating the port and committing the result
    /// immediately, for use outside the core's two-phase tick.
    pub fn write(&mut self, idx: usize, val: Word, enable: bool) {
        let next = self.evaluate(RegWritePort {
            index: idx,
            value: val,
            enable,
        });
        self.commit(next);
    }

    /// Stores a value directly, bypassing the clocked write port.
    ///
    /// Intended for loaders that pre-populate registers before the first
    /// tick. Writes to `x0` are accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is not below 32.
    pub fn load(&mut self, idx: usize, val: Word) -> Result<(), SimError> {
        if idx >= REG_COUNT {
            return Err(SimError::RegisterOutOfRange(idx));
        }
        if idx != REG_ZERO {
            self.regs[idx] = val;
        }
        Ok(())
    }

    /// Returns a copy of all register values, `x0` included.
    pub const fn to_array(&self) -> [Word; REG_COUNT] {
        self.regs
    }
}

impl Clocked for RegisterFile {
    type Inputs = RegWritePort;
    type Next = RegUpdate;

    fn evaluate(&self, port: RegWritePort) -> RegUpdate {
        let index = port.index & (REG_COUNT - 1);
        let value = if port.enable && index != REG_ZERO {
            port.value
        } else {
            0
        };
        RegUpdate { index, value }
    }

    fn commit(&mut self, next: RegUpdate) {
        let index = next.index & (REG_COUNT - 1);
        if index != REG_ZERO {
            self.regs[index] = next.value;
        }
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..REG_COUNT).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
