//! Pipeline control signals and operation types.
//!
//! This module defines the signals the decoder hands to the execution unit. It performs:
//! 1. **Operation Classification:** The fixed 19-entry operation enumeration.
//! 2. **Opcode Classes:** The coarse instruction form recognised by the decoder.

use serde::Serialize;

/// Operation codes produced by the decoder.
///
/// The discriminants are the numeric operation codes. `Add` is code 0 and is
/// also what every unrecognised encoding decodes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AluOp {
    /// Integer addition. Default value.
    #[default]
    Add = 0,
    /// Integer subtraction.
    Sub = 1,
    /// Shift left logical.
    Sll = 2,
    /// Set less than (signed).
    Slt = 3,
    /// Set less than unsigned.
    Sltu = 4,
    /// Bitwise XOR.
    Xor = 5,
    /// Shift right logical.
    Srl = 6,
    /// Shift right arithmetic.
    Sra = 7,
    /// OR.
    Or = 8,
    /// AND.
    And = 9,
    /// Add immediate.
    Addi = 10,
    /// Set less than immediate (signed).
    Slti = 11,
    /// Set less than immediate unsigned.
    Sltiu = 12,
    /// XOR immediate.
    Xori = 13,
    /// OR immediate.
    Ori = 14,
    /// AND immediate.
    Andi = 15,
    /// Branch if equal.
    Beq = 16,
    /// Branch if not equal.
    Bne = 17,
    /// Jump and link register.
    Jalr = 18,
}

impl AluOp {
    /// Every operation in code order.
    pub const ALL: [Self; 19] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Beq,
        Self::Bne,
        Self::Jalr,
    ];

    /// Numeric operation code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up an operation by numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Lower-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Jalr => "jalr",
        }
    }
}

/// Instruction form recognised by the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OpClass {
    /// Any opcode the decoder does not decode. Reset value.
    #[default]
    Other,
    /// Register-register arithmetic (`OP_REG`).
    Register,
    /// Register-immediate arithmetic (`OP_IMM`).
    Immediate,
}

impl OpClass {
    /// Whether instructions of this class write a destination register.
    pub const fn writes_register(self) -> bool {
        matches!(self, Self::Register | Self::Immediate)
    }
}
