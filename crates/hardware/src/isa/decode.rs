//! RV32 Instruction Decoder.
//!
//! This module maps a 32-bit instruction word onto a [`DecodedInstruction`].
//! Decoding is total: every word produces a record. Only the register-register
//! and register-immediate arithmetic forms are recognised; every other opcode,
//! including loads, stores and branches, decodes to operation 0 with no
//! immediate.

use crate::common::constants::Word;
use crate::core::pipeline::latches::DecodedInstruction;
use crate::core::pipeline::signals::{AluOp, OpClass};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Decodes an instruction word.
///
/// Register fields are extracted for every opcode; only the operation,
/// immediate and flags depend on the opcode class.
pub fn decode(inst: Word) -> DecodedInstruction {
    let base = DecodedInstruction {
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        rd: inst.rd(),
        ..DecodedInstruction::default()
    };

    match inst.opcode() {
        opcodes::OP_REG => DecodedInstruction {
            class: OpClass::Register,
            op: reg_op(inst.funct3(), inst.funct7()),
            use_imm: false,
            ..base
        },
        opcodes::OP_IMM => DecodedInstruction {
            class: OpClass::Immediate,
            op: imm_op(inst.funct3()),
            imm: inst.imm_i(),
            use_imm: true,
            ..base
        },
        _ => base,
    }
}

/// Selects the register-register operation.
///
/// Only funct7 `0100000` selects the alternate SUB/SRA encodings; any other
/// funct7 value falls back to ADD/SRL.
pub const fn reg_op(f3: u32, f7: u32) -> AluOp {
    let alt = f7 == funct7::ALT;
    match f3 {
        funct3::ADD_SUB if alt => AluOp::Sub,
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA if alt => AluOp::Sra,
        funct3::SRL_SRA => AluOp::Srl,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        _ => AluOp::Add,
    }
}

/// Selects the register-immediate operation.
///
/// Shift-immediate encodings (funct3 `001` and `101`) are not recognised and
/// decode to operation 0.
pub const fn imm_op(f3: u32) -> AluOp {
    match f3 {
        funct3::ADD_SUB => AluOp::Addi,
        funct3::SLT => AluOp::Slti,
        funct3::SLTU => AluOp::Sltiu,
        funct3::XOR => AluOp::Xori,
        funct3::OR => AluOp::Ori,
        funct3::AND => AluOp::Andi,
        _ => AluOp::Add,
    }
}
