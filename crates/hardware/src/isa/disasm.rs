//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a mnemonic string for trace
//! events and test diagnostics. Only the forms the decoder recognises are
//! rendered; everything else prints as `unknown` with the raw word.
//!
//! # Usage
//!
//! ```
//! use ringcore::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A00513), "addi x10, x0, 10");
//! ```

use crate::common::constants::Word;
use crate::core::pipeline::signals::{AluOp, OpClass};
use crate::isa::decode::decode;

/// Disassembles an instruction word.
pub fn disassemble(inst: Word) -> String {
    let d = decode(inst);
    match d.class {
        OpClass::Register => format!(
            "{} x{}, x{}, x{}",
            d.op.mnemonic(),
            d.rd,
            d.rs1,
            d.rs2
        ),
        // Shift-immediates decode to operation 0 but are not ADDI.
        OpClass::Immediate if d.op != AluOp::Add => format!(
            "{} x{}, x{}, {}",
            d.op.mnemonic(),
            d.rd,
            d.rs1,
            d.imm as i32
        ),
        _ => format!("unknown {inst:#010x}"),
    }
}
