//! RV32I Base Integer subset.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (OpReg, OpImm, and the named-only Load/Store/Branch/Jalr).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type instructions.

/// Function code 3 definitions.
pub mod funct3;

/// Function code 7 definitions.
pub mod funct7;

/// Major opcodes.
pub mod opcodes;
