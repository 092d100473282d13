//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction for the fixed-position fields of a 32-bit
//! instruction word. Every field is masked to its width, so indices derived
//! from it can never exceed the storage they address.

use crate::common::constants::Word;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for the 12-bit upper field (bits 20-31).
pub const UPPER12_MASK: u32 = 0xFFF;

/// Bit shift for the upper 12-bit field (bits 20-31).
const UPPER12_SHIFT: u32 = 20;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts bits 20-31 sign-extended to a full word (I-type immediate).
    fn imm_i(&self) -> Word;

    /// Extracts bits 20-31 zero-extended to a full word.
    ///
    /// This is the field the program counter loads on a taken branch.
    fn upper12(&self) -> Word;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    /// Arithmetic right shift of the signed view replicates bit 31 into the
    /// upper 20 bits.
    #[inline(always)]
    fn imm_i(&self) -> Word {
        ((*self as i32) >> UPPER12_SHIFT) as Word
    }

    #[inline(always)]
    fn upper12(&self) -> Word {
        (self >> UPPER12_SHIFT) & UPPER12_MASK
    }
}
