use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{Expr, ExprKind, Target, UnaryOp};

pub const NAME: &str = "BooleanLiteral";

pub const OPERATORS: &[&str] = &[
    "BooleanLiteral_TrueLiteral_ToFalseLiteral",
    "BooleanLiteral_FalseLiteral_ToTrueLiteral",
    "BooleanLiteral_LogicalNotOperator_Removal",
];

pub struct BooleanLiteralMutator;

impl NodeMutator for BooleanLiteralMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };

        match &expr.kind {
            ExprKind::Bool(value) => {
                let operator = if *value {
                    "BooleanLiteral_TrueLiteral_ToFalseLiteral"
                } else {
                    "BooleanLiteral_FalseLiteral_ToTrueLiteral"
                };
                if enabled.allows(operator) {
                    vec![Mutable::expr(Expr::bool_lit(!value), operator)]
                } else {
                    Vec::new()
                }
            }
            ExprKind::Unary {
                op: UnaryOp::Not,
                arg,
            } => {
                let operator = "BooleanLiteral_LogicalNotOperator_Removal";
                if enabled.allows(operator) {
                    vec![Mutable::expr((**arg).clone(), operator)]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }
}
