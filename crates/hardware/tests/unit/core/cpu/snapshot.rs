//! Snapshot Tests.

use ringcore::Core;
use ringcore::core::cpu::CoreSnapshot;
use ringcore::core::pipeline::latches::{DecodedInstruction, ExecutionResult};

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn fresh_core_snapshot() {
    let core = Core::new();
    pretty_assertions::assert_eq!(
        core.snapshot(),
        CoreSnapshot {
            pc: 0,
            instruction: 0,
            decoded: DecodedInstruction::default(),
            executed: ExecutionResult::default(),
            regs: [0; 32],
            reset: false,
        }
    );
}

#[test]
fn snapshot_serializes_to_json() {
    let add = InstructionBuilder::new().add(3, 1, 2).build();
    let mut tc = TestContext::new()
        .load_program(&[add])
        .with_reg(1, 5)
        .with_reg(2, 3);
    tc.run(3);

    let json = serde_json::to_value(tc.core.snapshot()).unwrap();
    assert_eq!(json["pc"], 12);
    assert_eq!(json["executed"]["result"], 8);
    assert_eq!(json["executed"]["branch_taken"], false);
    assert_eq!(json["decoded"]["class"], "Other");
    assert_eq!(json["regs"][1], 5);
    assert_eq!(json["reset"], false);
}
