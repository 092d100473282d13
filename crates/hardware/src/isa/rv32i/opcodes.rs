//! RV32I Major Opcodes.
//!
//! Defines the major opcodes (bits 6-0) the core knows about. Only the two
//! arithmetic forms are decoded. The load, store, branch and JALR opcodes are
//! provided for encoding instruction words; the decoder treats them like any
//! other unrecognised opcode.

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Immediate arithmetic instructions (ADDI, SLTI, ANDI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Load instructions (LB, LH, LW, etc.).
pub const OP_LOAD: u32 = 0b0000011;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;
