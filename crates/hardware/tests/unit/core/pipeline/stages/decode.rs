//! Decoder Stage Unit Tests.
//!
//! The decoder registers its output: the record for a presented word only
//! becomes visible after the edge.

use pretty_assertions::assert_eq;
use ringcore::core::pipeline::latches::DecodedInstruction;
use ringcore::core::pipeline::signals::{AluOp, OpClass};
use ringcore::core::pipeline::stages::{DecodeInputs, Decoder};
use ringcore::core::pipeline::traits::Clocked;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn output_updates_only_on_commit() {
    let inst = InstructionBuilder::new().add(3, 1, 2).build();
    let mut dec = Decoder::new();
    let next = dec.evaluate(DecodeInputs {
        reset: false,
        instruction: inst,
    });
    assert_eq!(*dec.output(), DecodedInstruction::default());

    dec.commit(next);
    assert_eq!(
        *dec.output(),
        DecodedInstruction {
            class: OpClass::Register,
            op: AluOp::Add,
            rs1: 1,
            rs2: 2,
            rd: 3,
            imm: 0,
            use_imm: false,
            is_load_store: false,
        }
    );
}

#[test]
fn reset_forces_default_record() {
    let inst = InstructionBuilder::new().addi(10, 0, 10).build();
    let mut dec = Decoder::new();
    dec.commit(dec.evaluate(DecodeInputs {
        reset: false,
        instruction: inst,
    }));
    assert_eq!(dec.output().op, AluOp::Addi);

    dec.commit(dec.evaluate(DecodeInputs {
        reset: true,
        instruction: inst,
    }));
    assert_eq!(*dec.output(), DecodedInstruction::default());
}
