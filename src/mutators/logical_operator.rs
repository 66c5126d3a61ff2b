use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ExprKind, LogicalOp, Target};

pub const NAME: &str = "LogicalOperator";

const TABLE: &[(LogicalOp, LogicalOp, &str)] = &[
    (
        LogicalOp::And,
        LogicalOp::Or,
        "LogicalOperator_LogicalAndOperator_ToLogicalOrOperator",
    ),
    (
        LogicalOp::Or,
        LogicalOp::And,
        "LogicalOperator_LogicalOrOperator_ToLogicalAndOperator",
    ),
    (
        LogicalOp::Nullish,
        LogicalOp::And,
        "LogicalOperator_NullishCoalescingOperator_ToLogicalAndOperator",
    ),
];

pub const OPERATORS: &[&str] = &[
    "LogicalOperator_LogicalAndOperator_ToLogicalOrOperator",
    "LogicalOperator_LogicalOrOperator_ToLogicalAndOperator",
    "LogicalOperator_NullishCoalescingOperator_ToLogicalAndOperator",
];

pub struct LogicalOperatorMutator;

impl NodeMutator for LogicalOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Logical { op, .. } = &expr.kind else {
            return Vec::new();
        };
        let Some((_, replacement_op, operator)) = TABLE.iter().find(|(from, ..)| from == op) else {
            return Vec::new();
        };
        if !enabled.allows(operator) {
            return Vec::new();
        }

        let mut replacement = expr.clone();
        if let ExprKind::Logical { op, .. } = &mut replacement.kind {
            *op = *replacement_op;
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
