use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{AssignOp, ExprKind, Target};

pub const NAME: &str = "AssignmentOperator";

const TABLE: &[(AssignOp, AssignOp, &str)] = &[
    (
        AssignOp::AddAssign,
        AssignOp::SubAssign,
        "AssignmentOperator_AdditionAssignment_ToSubtractionAssignment",
    ),
    (
        AssignOp::SubAssign,
        AssignOp::AddAssign,
        "AssignmentOperator_SubtractionAssignment_ToAdditionAssignment",
    ),
    (
        AssignOp::MulAssign,
        AssignOp::DivAssign,
        "AssignmentOperator_MultiplicationAssignment_ToDivisionAssignment",
    ),
    (
        AssignOp::DivAssign,
        AssignOp::MulAssign,
        "AssignmentOperator_DivisionAssignment_ToMultiplicationAssignment",
    ),
    (
        AssignOp::RemAssign,
        AssignOp::MulAssign,
        "AssignmentOperator_RemainderAssignment_ToMultiplicationAssignment",
    ),
    (
        AssignOp::ShlAssign,
        AssignOp::ShrAssign,
        "AssignmentOperator_LeftShiftAssignment_ToRightShiftAssignment",
    ),
    (
        AssignOp::ShrAssign,
        AssignOp::ShlAssign,
        "AssignmentOperator_RightShiftAssignment_ToLeftShiftAssignment",
    ),
    (
        AssignOp::BitAndAssign,
        AssignOp::BitOrAssign,
        "AssignmentOperator_BitwiseAndAssignment_ToBitwiseOrAssignment",
    ),
    (
        AssignOp::BitOrAssign,
        AssignOp::BitAndAssign,
        "AssignmentOperator_BitwiseOrAssignment_ToBitwiseAndAssignment",
    ),
    (
        AssignOp::AndAssign,
        AssignOp::OrAssign,
        "AssignmentOperator_LogicalAndAssignment_ToLogicalOrAssignment",
    ),
    (
        AssignOp::OrAssign,
        AssignOp::AndAssign,
        "AssignmentOperator_LogicalOrAssignment_ToLogicalAndAssignment",
    ),
    (
        AssignOp::NullishAssign,
        AssignOp::AndAssign,
        "AssignmentOperator_NullishCoalescingAssignment_ToLogicalAndAssignment",
    ),
];

pub const OPERATORS: &[&str] = &[
    "AssignmentOperator_AdditionAssignment_ToSubtractionAssignment",
    "AssignmentOperator_SubtractionAssignment_ToAdditionAssignment",
    "AssignmentOperator_MultiplicationAssignment_ToDivisionAssignment",
    "AssignmentOperator_DivisionAssignment_ToMultiplicationAssignment",
    "AssignmentOperator_RemainderAssignment_ToMultiplicationAssignment",
    "AssignmentOperator_LeftShiftAssignment_ToRightShiftAssignment",
    "AssignmentOperator_RightShiftAssignment_ToLeftShiftAssignment",
    "AssignmentOperator_BitwiseAndAssignment_ToBitwiseOrAssignment",
    "AssignmentOperator_BitwiseOrAssignment_ToBitwiseAndAssignment",
    "AssignmentOperator_LogicalAndAssignment_ToLogicalOrAssignment",
    "AssignmentOperator_LogicalOrAssignment_ToLogicalAndAssignment",
    "AssignmentOperator_NullishCoalescingAssignment_ToLogicalAndAssignment",
];

/// The logical-assignment forms stay meaningful on strings, so the textual
/// guard does not apply to them.
const STRING_SAFE: &[AssignOp] = &[
    AssignOp::AndAssign,
    AssignOp::OrAssign,
    AssignOp::NullishAssign,
];

pub struct AssignmentOperatorMutator;

impl NodeMutator for AssignmentOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Assign { op, value, .. } = &expr.kind else {
            return Vec::new();
        };
        let Some((_, replacement_op, operator)) = TABLE.iter().find(|(from, ..)| from == op) else {
            return Vec::new();
        };
        if value.is_textual() && !STRING_SAFE.contains(op) {
            return Vec::new();
        }
        if !enabled.allows(operator) {
            return Vec::new();
        }

        let mut replacement = expr.clone();
        if let ExprKind::Assign { op, .. } = &mut replacement.kind {
            *op = *replacement_op;
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
