use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ExprKind, Target};

pub const NAME: &str = "OptionalChaining";

pub const OPERATORS: &[&str] = &[
    "OptionalChaining_OptionalMemberExpression_OptionalRemoval",
    "OptionalChaining_OptionalComputedMemberExpression_OptionalRemoval",
    "OptionalChaining_OptionalCallExpression_OptionalRemoval",
];

pub struct OptionalChainingMutator;

impl NodeMutator for OptionalChainingMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };

        let operator = match &expr.kind {
            ExprKind::Member {
                optional: true,
                computed,
                ..
            } => {
                if *computed {
                    "OptionalChaining_OptionalComputedMemberExpression_OptionalRemoval"
                } else {
                    "OptionalChaining_OptionalMemberExpression_OptionalRemoval"
                }
            }
            ExprKind::Call { optional: true, .. } => {
                "OptionalChaining_OptionalCallExpression_OptionalRemoval"
            }
            _ => return Vec::new(),
        };
        if !enabled.allows(operator) {
            return Vec::new();
        }

        let mut replacement = expr.clone();
        match &mut replacement.kind {
            ExprKind::Member { optional, .. } | ExprKind::Call { optional, .. } => {
                *optional = false;
            }
            _ => {}
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
