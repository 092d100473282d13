//! Program Counter.
//!
//! Holds the fetch address. On each edge the counter resets to zero, loads a
//! branch target, or advances by one instruction.
//!
//! The branch target is the upper 12-bit field of the instruction word
//! currently on the memory read port, zero-extended and used as an absolute
//! address. It is not a PC-relative offset.

use serde::Serialize;

use crate::common::constants::{PC_STEP, Word};
use crate::core::pipeline::traits::Clocked;
use crate::isa::instruction::InstructionBits;

/// Inputs sampled by the program counter at an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcInputs {
    /// Reset level.
    pub reset: bool,
    /// Branch-taken signal from the execution unit's registered output.
    pub branch_taken: bool,
    /// Instruction word currently presented by memory.
    pub instruction: Word,
}

/// Program counter register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProgramCounter {
    value: Word,
}

impl ProgramCounter {
    /// Creates a program counter at its reset value.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Current address.
    pub const fn value(&self) -> Word {
        self.value
    }
}

impl Clocked for ProgramCounter {
    type Inputs = PcInputs;
    type Next = Word;

    fn evaluate(&self, inputs: PcInputs) -> Word {
        if inputs.reset {
            0
        } else if inputs.branch_taken {
            inputs.instruction.upper12()
        } else {
            self.value.wrapping_add(PC_STEP)
        }
    }

    fn commit(&mut self, next: Word) {
        self.value = next;
    }
}
