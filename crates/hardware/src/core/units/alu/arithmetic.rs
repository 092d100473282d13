//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction over 32-bit words. Both wrap
//! modulo 2^32.

use crate::common::constants::Word;
use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (`Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
