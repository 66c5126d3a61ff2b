use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ExprKind, Target, UnaryOp};

pub const NAME: &str = "UnaryOperator";

pub const OPERATORS: &[&str] = &[
    "UnaryOperator_UnaryPlusOperator_ToUnaryMinusOperator",
    "UnaryOperator_UnaryMinusOperator_ToUnaryPlusOperator",
    "UnaryOperator_BitwiseNotOperator_Removal",
];

pub struct UnaryOperatorMutator;

impl NodeMutator for UnaryOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Unary { op, arg } = &expr.kind else {
            return Vec::new();
        };

        let (replacement, operator) = match op {
            UnaryOp::Plus => {
                let mut repl = expr.clone();
                if let ExprKind::Unary { op, .. } = &mut repl.kind {
                    *op = UnaryOp::Minus;
                }
                (repl, "UnaryOperator_UnaryPlusOperator_ToUnaryMinusOperator")
            }
            UnaryOp::Minus => {
                let mut repl = expr.clone();
                if let ExprKind::Unary { op, .. } = &mut repl.kind {
                    *op = UnaryOp::Plus;
                }
                (repl, "UnaryOperator_UnaryMinusOperator_ToUnaryPlusOperator")
            }
            // the argument substitutes for the whole expression
            UnaryOp::BitNot => ((**arg).clone(), "UnaryOperator_BitwiseNotOperator_Removal"),
            _ => return Vec::new(),
        };

        if !enabled.allows(operator) {
            return Vec::new();
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
