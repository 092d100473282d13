//! Branch Resolution Unit (BRU).
//!
//! Evaluates the equality conditions of the two conditional branch
//! operations and the unconditional JALR. The target is not computed here:
//! the program counter takes it from the instruction word on the memory read
//! port.

use crate::common::constants::Word;
use crate::core::pipeline::signals::AluOp;

/// Branch condition evaluator.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Returns whether `op` is taken for operands `a` and `b`.
    ///
    /// `Jalr` is always taken; every non-branch operation is not taken.
    pub const fn resolve(op: AluOp, a: Word, b: Word) -> bool {
        match op {
            AluOp::Beq => a == b,
            AluOp::Bne => a != b,
            AluOp::Jalr => true,
            _ => false,
        }
    }
}
