//! Disassembler Tests.

use ringcore::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

#[rstest]
#[case(InstructionBuilder::new().add(3, 1, 2).build(), "add x3, x1, x2")]
#[case(InstructionBuilder::new().sub(5, 6, 7).build(), "sub x5, x6, x7")]
#[case(InstructionBuilder::new().slt(1, 2, 3).build(), "slt x1, x2, x3")]
#[case(InstructionBuilder::new().and(8, 9, 10).build(), "and x8, x9, x10")]
#[case(InstructionBuilder::new().or(8, 9, 10).build(), "or x8, x9, x10")]
#[case(InstructionBuilder::new().xor(8, 9, 10).build(), "xor x8, x9, x10")]
#[case(InstructionBuilder::new().addi(10, 0, 10).build(), "addi x10, x0, 10")]
#[case(InstructionBuilder::new().addi(1, 2, -4).build(), "addi x1, x2, -4")]
#[case(InstructionBuilder::new().slti(4, 5, 6).build(), "slti x4, x5, 6")]
fn recognised_forms(#[case] inst: u32, #[case] text: &str) {
    assert_eq!(disassemble(inst), text);
}

#[rstest]
#[case(InstructionBuilder::new().beq(1, 2, 8).build())]
#[case(InstructionBuilder::new().bne(3, 4, -8).build())]
#[case(InstructionBuilder::new().jalr(1, 2, 0).build())]
#[case(InstructionBuilder::new().i_type(1, 2, 3, 0b001).build())]
#[case(0)]
fn other_words_print_raw(#[case] inst: u32) {
    assert_eq!(disassemble(inst), format!("unknown {inst:#010x}"));
}
