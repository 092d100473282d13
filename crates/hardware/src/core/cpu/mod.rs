//! Core Definition and Initialization.
//!
//! This module defines the central `Core` structure, which owns every clocked
//! element by value:
//! 1. **Program Counter:** The fetch address.
//! 2. **Decoder / Execution Unit:** Registered decode record and ALU result.
//! 3. **Register File / Memory:** The architectural storage.
//! 4. **Observability:** Trace flag and activity counters.
//!
//! The clock driver lives in [`execution`].

/// Two-phase tick and reset control.
pub mod execution;

use serde::Serialize;

use crate::common::constants::{REG_COUNT, Word};
use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::{DecodedInstruction, ExecutionResult};
use crate::core::pipeline::stages::{Decoder, ExecutionUnit, MemoryUnit, ProgramCounter};
use crate::stats::CoreStats;

/// The whole core: every clocked element plus the reset level.
///
/// State is only advanced by [`Core::tick`]. The loader methods are meant to
/// be used before the first tick.
#[derive(Clone, Debug)]
pub struct Core {
    pc: ProgramCounter,
    decoder: Decoder,
    regs: RegisterFile,
    exec: ExecutionUnit,
    memory: MemoryUnit,
    reset: bool,
    /// Emit a trace event for every edge.
    pub trace: bool,
    /// Activity counters.
    pub stats: CoreStats,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the core's state at an edge boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoreSnapshot {
    /// Program counter.
    pub pc: Word,
    /// Word on the memory read port.
    pub instruction: Word,
    /// Decoder output.
    pub decoded: DecodedInstruction,
    /// Execution unit output.
    pub executed: ExecutionResult,
    /// Register values, `x0` first.
    pub regs: [Word; REG_COUNT],
    /// Reset level.
    pub reset: bool,
}

impl Core {
    /// Creates a core with every register at its reset value and memory zeroed.
    pub fn new() -> Self {
        Self {
            pc: ProgramCounter::new(),
            decoder: Decoder::new(),
            regs: RegisterFile::new(),
            exec: ExecutionUnit::new(),
            memory: MemoryUnit::new(),
            reset: false,
            trace: false,
            stats: CoreStats::default(),
        }
    }

    /// Creates a core configured from `config`.
    ///
    /// The reset policy is applied by [`crate::sim::Simulator`], not here.
    pub fn with_config(config: &Config) -> Self {
        Self {
            trace: config.general.trace_ticks,
            ..Self::new()
        }
    }

    /// Current program counter (top-level output port).
    pub const fn peek_pc(&self) -> Word {
        self.pc.value()
    }

    /// Last committed execution result (top-level output port).
    pub const fn peek_result(&self) -> Word {
        self.exec.output().result
    }

    /// Whether reset is currently asserted.
    pub const fn in_reset(&self) -> bool {
        self.reset
    }

    /// Register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Memory.
    pub const fn memory(&self) -> &MemoryUnit {
        &self.memory
    }

    /// Decoder.
    pub const fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Execution unit.
    pub const fn execution(&self) -> &ExecutionUnit {
        &self.exec
    }

    /// Copies `image` into memory from word 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image exceeds the memory.
    pub fn load_memory(&mut self, image: &[Word]) -> Result<(), SimError> {
        self.memory.load(image)
    }

    /// Pre-loads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is not below 32.
    pub fn load_register(&mut self, idx: usize, val: Word) -> Result<(), SimError> {
        self.regs.load(idx, val)
    }

    /// Captures the current state.
    pub const fn snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            pc: self.pc.value(),
            instruction: self.memory.read_data(),
            decoded: *self.decoder.output(),
            executed: *self.exec.output(),
            regs: self.regs.to_array(),
            reset: self.reset,
        }
    }
}
