//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode and function-code constants, field extraction, the
//! decoder and a disassembler for the RV32 subset the core understands.

/// Instruction decoding into the decoder's registered record.
pub mod decode;

/// Instruction disassembler for trace events and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Base integer opcodes and function codes.
pub mod rv32i;
