//! Execution Stage Unit Tests.

use ringcore::core::pipeline::latches::{DecodedInstruction, ExecutionResult};
use ringcore::core::pipeline::signals::{AluOp, OpClass};
use ringcore::core::pipeline::stages::{ExecuteInputs, ExecutionUnit};
use ringcore::core::pipeline::traits::Clocked;

fn record(op: AluOp) -> DecodedInstruction {
    DecodedInstruction {
        class: OpClass::Register,
        op,
        ..DecodedInstruction::default()
    }
}

fn execute(op: AluOp, rv1: u32, rv2: u32) -> ExecutionResult {
    let mut unit = ExecutionUnit::new();
    let next = unit.evaluate(ExecuteInputs {
        reset: false,
        decoded: record(op),
        rv1,
        rv2,
    });
    unit.commit(next);
    *unit.output()
}

#[test]
fn add_registers_sum() {
    let out = execute(AluOp::Add, 5, 3);
    assert_eq!(out.result, 8);
    assert!(!out.branch_taken);
}

#[test]
fn beq_with_equal_operands_is_taken() {
    let out = execute(AluOp::Beq, 7, 7);
    assert_eq!(out.result, 0);
    assert!(out.branch_taken);
}

#[test]
fn jalr_uses_decoded_immediate() {
    let mut unit = ExecutionUnit::new();
    let next = unit.evaluate(ExecuteInputs {
        reset: false,
        decoded: DecodedInstruction {
            op: AluOp::Jalr,
            imm: 0x20,
            ..DecodedInstruction::default()
        },
        rv1: 0x100,
        rv2: 0,
    });
    unit.commit(next);
    assert_eq!(unit.output().result, 0x120);
    assert!(unit.output().branch_taken);
}

#[test]
fn reset_clears_result_and_branch() {
    let mut unit = ExecutionUnit::new();
    unit.commit(unit.evaluate(ExecuteInputs {
        reset: false,
        decoded: record(AluOp::Bne),
        rv1: 1,
        rv2: 2,
    }));
    assert!(unit.output().branch_taken);

    unit.commit(unit.evaluate(ExecuteInputs {
        reset: true,
        decoded: record(AluOp::Bne),
        rv1: 1,
        rv2: 2,
    }));
    assert_eq!(*unit.output(), ExecutionResult::default());
}
