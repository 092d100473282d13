//! ALU logical and comparison operations.
//!
//! AND and OR are logical, not bitwise: each operand is reduced to a truth
//! value (nonzero is true) and the result is 0 or 1. XOR is bitwise.
//! SLT compares the signed views of its operands.

use crate::common::constants::Word;
use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (`And`, `Or`, `Xor` or `Slt`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The result word. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::And => (a != 0 && b != 0) as Word,
        AluOp::Or => (a != 0 || b != 0) as Word,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i32) < (b as i32)) as Word,
        _ => 0,
    }
}
