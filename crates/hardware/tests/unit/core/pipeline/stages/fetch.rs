//! Program Counter Unit Tests.

use ringcore::core::pipeline::stages::{PcInputs, ProgramCounter};
use ringcore::core::pipeline::traits::Clocked;

use crate::common::builder::instruction::InstructionBuilder;

fn step(pc: &mut ProgramCounter, inputs: PcInputs) {
    let next = pc.evaluate(inputs);
    pc.commit(next);
}

#[test]
fn advances_by_one_word() {
    let mut pc = ProgramCounter::new();
    step(&mut pc, PcInputs::default());
    step(&mut pc, PcInputs::default());
    assert_eq!(pc.value(), 8);
}

#[test]
fn reset_returns_to_zero() {
    let mut pc = ProgramCounter::new();
    for _ in 0..5 {
        step(&mut pc, PcInputs::default());
    }
    step(
        &mut pc,
        PcInputs {
            reset: true,
            ..PcInputs::default()
        },
    );
    assert_eq!(pc.value(), 0);
}

#[test]
fn taken_branch_loads_upper_field_of_presented_word() {
    let inst = InstructionBuilder::new().addi(0, 0, 0x123).build();
    let mut pc = ProgramCounter::new();
    step(&mut pc, PcInputs::default());
    step(
        &mut pc,
        PcInputs {
            reset: false,
            branch_taken: true,
            instruction: inst,
        },
    );
    assert_eq!(pc.value(), 0x123);
}

#[test]
fn branch_target_is_zero_extended() {
    let pc = ProgramCounter::new();
    let next = pc.evaluate(PcInputs {
        reset: false,
        branch_taken: true,
        instruction: 0xFFF0_0000,
    });
    assert_eq!(next, 0xFFF);
}

#[test]
fn evaluate_leaves_value_until_commit() {
    let pc = ProgramCounter::new();
    let next = pc.evaluate(PcInputs::default());
    assert_eq!(next, 4);
    assert_eq!(pc.value(), 0);
}
