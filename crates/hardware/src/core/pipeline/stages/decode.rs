//! Instruction Decode (ID) Stage.
//!
//! Registers the decoder's output. The combinational decode of the presented
//! word is computed in the evaluate phase and only becomes visible to the
//! register file and execution unit after the edge, so the record always
//! describes the word presented one cycle earlier.

use serde::Serialize;

use crate::common::constants::Word;
use crate::core::pipeline::latches::DecodedInstruction;
use crate::core::pipeline::traits::Clocked;
use crate::isa::decode::decode;

/// Inputs sampled by the decoder at an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeInputs {
    /// Reset level.
    pub reset: bool,
    /// Instruction word presented by memory.
    pub instruction: Word,
}

/// Decoder with registered outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Decoder {
    out: DecodedInstruction,
}

impl Decoder {
    /// Creates a decoder holding its reset outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered decoded record.
    pub const fn output(&self) -> &DecodedInstruction {
        &self.out
    }
}

impl Clocked for Decoder {
    type Inputs = DecodeInputs;
    type Next = DecodedInstruction;

    fn evaluate(&self, inputs: DecodeInputs) -> DecodedInstruction {
        if inputs.reset {
            DecodedInstruction::default()
        } else {
            decode(inputs.instruction)
        }
    }

    fn commit(&mut self, next: DecodedInstruction) {
        self.out = next;
    }
}
