//! Instruction Execute (EX) Stage.
//!
//! Registers the ALU result and branch signal. Operands are read
//! combinationally from the register file using the decoder's registered
//! record, so the result describes the instruction decoded one edge earlier.

use serde::Serialize;

use crate::common::constants::Word;
use crate::core::pipeline::latches::{DecodedInstruction, ExecutionResult};
use crate::core::pipeline::traits::Clocked;
use crate::core::units::alu::Alu;

/// Inputs sampled by the execution unit at an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteInputs {
    /// Reset level.
    pub reset: bool,
    /// Decoder's registered record.
    pub decoded: DecodedInstruction,
    /// Value read from `decoded.rs1`.
    pub rv1: Word,
    /// Value read from `decoded.rs2`.
    pub rv2: Word,
}

/// Execution unit with registered outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionUnit {
    out: ExecutionResult,
}

impl ExecutionUnit {
    /// Creates an execution unit holding its reset outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered result.
    pub const fn output(&self) -> &ExecutionResult {
        &self.out
    }
}

impl Clocked for ExecutionUnit {
    type Inputs = ExecuteInputs;
    type Next = ExecutionResult;

    fn evaluate(&self, inputs: ExecuteInputs) -> ExecutionResult {
        if inputs.reset {
            return ExecutionResult::default();
        }
        let d = &inputs.decoded;
        Alu::execute(d.op, inputs.rv1, inputs.rv2, d.imm, d.use_imm)
    }

    fn commit(&mut self, next: ExecutionResult) {
        self.out = next;
    }
}
