use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ExprKind, Target, UpdateOp};

pub const NAME: &str = "UpdateOperator";

pub const OPERATORS: &[&str] = &[
    "UpdateOperator_PrefixIncrementOperator_Negation",
    "UpdateOperator_PrefixDecrementOperator_Negation",
    "UpdateOperator_PostfixIncrementOperator_Negation",
    "UpdateOperator_PostfixDecrementOperator_Negation",
];

pub struct UpdateOperatorMutator;

impl NodeMutator for UpdateOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Update { op, prefix, .. } = &expr.kind else {
            return Vec::new();
        };

        let operator = match (*prefix, op) {
            (true, UpdateOp::Inc) => "UpdateOperator_PrefixIncrementOperator_Negation",
            (true, UpdateOp::Dec) => "UpdateOperator_PrefixDecrementOperator_Negation",
            (false, UpdateOp::Inc) => "UpdateOperator_PostfixIncrementOperator_Negation",
            (false, UpdateOp::Dec) => "UpdateOperator_PostfixDecrementOperator_Negation",
        };
        if !enabled.allows(operator) {
            return Vec::new();
        }

        let mut replacement = expr.clone();
        if let ExprKind::Update { op, .. } = &mut replacement.kind {
            *op = match op {
                UpdateOp::Inc => UpdateOp::Dec,
                UpdateOp::Dec => UpdateOp::Inc,
            };
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
