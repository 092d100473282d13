//! Pipeline latch structures for inter-stage communication.
//!
//! These are the registered outputs of the decoder and the execution unit.
//! Each value lives for exactly one cycle: it is produced at one edge and
//! consumed by downstream stages during the next evaluate phase.
//!
//! The `Default` value of each latch is its reset value.

use serde::Serialize;

use crate::common::constants::Word;
use crate::core::pipeline::signals::{AluOp, OpClass};

/// Registered output of the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodedInstruction {
    /// Instruction form.
    pub class: OpClass,
    /// Operation selected for the execution unit.
    pub op: AluOp,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate, zero for forms without one.
    pub imm: Word,
    /// Whether the second operand is the immediate.
    pub use_imm: bool,
    /// Whether the instruction is a load or store. Never set by the decoder.
    pub is_load_store: bool,
}

/// Registered output of the execution unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// ALU result.
    pub result: Word,
    /// Branch-taken signal fed back to the program counter.
    pub branch_taken: bool,
}
