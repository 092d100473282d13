//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational half of the execution unit. It
//! maps an operation and its operands onto an [`ExecutionResult`].
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or (logical), Xor, Slt
//!
//! Branch conditions are resolved by [`crate::core::units::bru`].
//!
//! Only the operations below produce a value; every other code, including
//! the shift and unsigned-compare codes and the immediate arithmetic codes
//! other than SLTI, yields a zero result and no branch.
//!
//! | op         | result        | branch    |
//! |------------|---------------|-----------|
//! | ADD / SUB  | a ± b         | no        |
//! | AND / OR   | logical, 0/1  | no        |
//! | XOR        | a ^ b         | no        |
//! | SLT        | a < b signed  | no        |
//! | SLTI       | a < imm signed| no        |
//! | BEQ / BNE  | 0             | a == b / a != b |
//! | JALR       | a + imm       | always    |

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Logical and comparison operations (and, or, xor, slt).
pub mod logic;

use crate::common::constants::Word;
use crate::core::pipeline::latches::ExecutionResult;
use crate::core::pipeline::signals::AluOp;
use crate::core::units::bru::Bru;

/// Arithmetic Logic Unit for the core's operation table.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates one operation.
    ///
    /// # Arguments
    ///
    /// * `op`       - The operation to perform.
    /// * `a`        - Value of the first source register.
    /// * `b`        - Value of the second source register.
    /// * `imm`      - Decoded immediate.
    /// * `_use_imm` - Use-immediate flag; operand selection does not consult it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringcore::core::units::alu::Alu;
    /// use ringcore::core::pipeline::signals::AluOp;
    ///
    /// let r = Alu::execute(AluOp::Add, 5, 3, 0, false);
    /// assert_eq!(r.result, 8);
    /// assert!(!r.branch_taken);
    ///
    /// // AND reduces its operands to truth values.
    /// assert_eq!(Alu::execute(AluOp::And, 0b1100, 0b0011, 0, false).result, 1);
    ///
    /// let r = Alu::execute(AluOp::Jalr, 0x100, 0, 8, true);
    /// assert_eq!(r.result, 0x108);
    /// assert!(r.branch_taken);
    /// ```
    pub const fn execute(op: AluOp, a: Word, b: Word, imm: Word, _use_imm: bool) -> ExecutionResult {
        match op {
            AluOp::Add | AluOp::Sub => ExecutionResult {
                result: arithmetic::execute(op, a, b),
                branch_taken: false,
            },

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Slt => ExecutionResult {
                result: logic::execute(op, a, b),
                branch_taken: false,
            },

            AluOp::Slti => ExecutionResult {
                result: logic::execute(AluOp::Slt, a, imm),
                branch_taken: false,
            },

            AluOp::Beq | AluOp::Bne => ExecutionResult {
                result: 0,
                branch_taken: Bru::resolve(op, a, b),
            },

            AluOp::Jalr => ExecutionResult {
                result: arithmetic::execute(AluOp::Add, a, imm),
                branch_taken: Bru::resolve(op, a, b),
            },

            _ => ExecutionResult {
                result: 0,
                branch_taken: false,
            },
        }
    }
}
