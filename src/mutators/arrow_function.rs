use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ArrowBody, Expr, ExprKind, Target};

pub const NAME: &str = "ArrowFunction";

pub const OPERATORS: &[&str] = &["ArrowFunction_ExpressionBody_Removal"];

pub struct ArrowFunctionMutator;

impl NodeMutator for ArrowFunctionMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Arrow {
            body: ArrowBody::Expr(body),
            ..
        } = &expr.kind
        else {
            return Vec::new();
        };
        // `() => undefined` is already its own mutant
        if body.is_undefined_ident() {
            return Vec::new();
        }

        let operator = "ArrowFunction_ExpressionBody_Removal";
        if !enabled.allows(operator) {
            return Vec::new();
        }
        let replacement = Expr::arrow(
            Vec::new(),
            ArrowBody::Expr(Box::new(Expr::ident("undefined"))),
        );
        vec![Mutable::expr(replacement, operator)]
    }
}
