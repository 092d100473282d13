//! ALU Operation Table Tests.
//!
//! Only a subset of the operation codes produce a value. Logical AND/OR reduce
//! their operands to truth values, and every code outside the table yields a
//! zero result with no branch.

use proptest::prelude::*;
use ringcore::core::pipeline::signals::AluOp;
use ringcore::core::units::alu::Alu;
use rstest::rstest;

#[rstest]
#[case::add(AluOp::Add, 5, 3, 0, 8)]
#[case::add_wraps(AluOp::Add, 0xFFFF_FFFF, 2, 0, 1)]
#[case::sub(AluOp::Sub, 10, 4, 0, 6)]
#[case::sub_wraps(AluOp::Sub, 3, 5, 0, 0xFFFF_FFFE)]
#[case::and_both_true(AluOp::And, 0b1100, 0b0011, 0, 1)]
#[case::and_one_false(AluOp::And, 0xFF, 0, 0, 0)]
#[case::or_one_true(AluOp::Or, 0, 4, 0, 1)]
#[case::or_both_false(AluOp::Or, 0, 0, 0, 0)]
#[case::xor(AluOp::Xor, 0b1100, 0b1010, 0, 0b0110)]
#[case::slt_signed(AluOp::Slt, 0xFFFF_FFFF, 1, 0, 1)]
#[case::slt_false(AluOp::Slt, 1, 0xFFFF_FFFF, 0, 0)]
#[case::slti(AluOp::Slti, 0xFFFF_FFFF, 99, 0, 1)]
#[case::slti_ignores_b(AluOp::Slti, 5, 100, 3, 0)]
#[case::jalr(AluOp::Jalr, 0x100, 0, 8, 0x108)]
fn table_results(
    #[case] op: AluOp,
    #[case] a: u32,
    #[case] b: u32,
    #[case] imm: u32,
    #[case] expected: u32,
) {
    assert_eq!(Alu::execute(op, a, b, imm, false).result, expected);
}

#[rstest]
#[case(AluOp::Sll)]
#[case(AluOp::Sltu)]
#[case(AluOp::Srl)]
#[case(AluOp::Sra)]
#[case(AluOp::Addi)]
#[case(AluOp::Sltiu)]
#[case(AluOp::Xori)]
#[case(AluOp::Ori)]
#[case(AluOp::Andi)]
fn unhandled_codes_yield_zero(#[case] op: AluOp) {
    let r = Alu::execute(op, 0x1234, 0x5678, 0x9A, true);
    assert_eq!(r.result, 0);
    assert!(!r.branch_taken);
}

#[test]
fn use_imm_does_not_select_operand() {
    assert_eq!(Alu::execute(AluOp::Add, 2, 3, 100, true).result, 5);
}

#[test]
fn beq_and_bne_resolve_equality() {
    assert!(Alu::execute(AluOp::Beq, 7, 7, 0, false).branch_taken);
    assert!(!Alu::execute(AluOp::Beq, 7, 8, 0, false).branch_taken);
    assert!(Alu::execute(AluOp::Bne, 7, 8, 0, false).branch_taken);
    assert!(!Alu::execute(AluOp::Bne, 7, 7, 0, false).branch_taken);
    assert_eq!(Alu::execute(AluOp::Beq, 7, 7, 0, false).result, 0);
}

proptest! {
    #[test]
    fn only_control_ops_branch(code in 0u8..19, a in any::<u32>(), b in any::<u32>(), imm in any::<u32>()) {
        let op = AluOp::from_code(code).unwrap();
        let r = Alu::execute(op, a, b, imm, false);
        match op {
            AluOp::Jalr => prop_assert!(r.branch_taken),
            AluOp::Beq => prop_assert_eq!(r.branch_taken, a == b),
            AluOp::Bne => prop_assert_eq!(r.branch_taken, a != b),
            _ => prop_assert!(!r.branch_taken),
        }
    }

    #[test]
    fn logical_ops_are_boolean(a in any::<u32>(), b in any::<u32>()) {
        prop_assert!(Alu::execute(AluOp::And, a, b, 0, false).result <= 1);
        prop_assert!(Alu::execute(AluOp::Or, a, b, 0, false).result <= 1);
    }
}
