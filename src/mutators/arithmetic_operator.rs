use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{BinaryOp, Expr, ExprKind, Target};

pub const NAME: &str = "ArithmeticOperator";

const TABLE: &[(BinaryOp, BinaryOp, &str)] = &[
    (
        BinaryOp::Add,
        BinaryOp::Sub,
        "ArithmeticOperator_AdditionOperator_ToSubtractionOperator",
    ),
    (
        BinaryOp::Sub,
        BinaryOp::Add,
        "ArithmeticOperator_SubtractionOperator_ToAdditionOperator",
    ),
    (
        BinaryOp::Mul,
        BinaryOp::Div,
        "ArithmeticOperator_MultiplicationOperator_ToDivisionOperator",
    ),
    (
        BinaryOp::Div,
        BinaryOp::Mul,
        "ArithmeticOperator_DivisionOperator_ToMultiplicationOperator",
    ),
    (
        BinaryOp::Rem,
        BinaryOp::Mul,
        "ArithmeticOperator_RemainderOperator_ToMultiplicationOperator",
    ),
];

pub const OPERATORS: &[&str] = &[
    "ArithmeticOperator_AdditionOperator_ToSubtractionOperator",
    "ArithmeticOperator_SubtractionOperator_ToAdditionOperator",
    "ArithmeticOperator_MultiplicationOperator_ToDivisionOperator",
    "ArithmeticOperator_DivisionOperator_ToMultiplicationOperator",
    "ArithmeticOperator_RemainderOperator_ToMultiplicationOperator",
];

pub struct ArithmeticOperatorMutator;

impl NodeMutator for ArithmeticOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Binary { op, left, right } = &expr.kind else {
            return Vec::new();
        };
        let Some((_, replacement_op, operator)) = TABLE.iter().find(|(from, ..)| from == op) else {
            return Vec::new();
        };
        if has_textual_operand(left, right) || !enabled.allows(operator) {
            return Vec::new();
        }

        let mut replacement = expr.clone();
        if let ExprKind::Binary { op, .. } = &mut replacement.kind {
            *op = *replacement_op;
        }
        vec![Mutable::expr(replacement, operator)]
    }
}

/// Numeric swaps make no sense for string concatenation. For a left-nested
/// binary chain (`a + b + "s"` parses as `(a + b) + "s"`), the effective type
/// of the left operand is decided by its own right operand.
fn has_textual_operand(left: &Expr, right: &Expr) -> bool {
    let effective_left = match &left.kind {
        ExprKind::Binary { right, .. } => right,
        _ => left,
    };
    right.is_textual() || effective_left.is_textual()
}
