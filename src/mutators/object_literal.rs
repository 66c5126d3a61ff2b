use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{Expr, ExprKind, Target};

pub const NAME: &str = "ObjectLiteral";

pub const OPERATORS: &[&str] = &["ObjectLiteral_Properties_Removal"];

pub struct ObjectLiteralMutator;

impl NodeMutator for ObjectLiteralMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Object(properties) = &expr.kind else {
            return Vec::new();
        };
        // an already-empty object has nothing to remove
        if properties.is_empty() {
            return Vec::new();
        }

        let operator = "ObjectLiteral_Properties_Removal";
        if !enabled.allows(operator) {
            return Vec::new();
        }
        vec![Mutable::expr(Expr::object(Vec::new()), operator)]
    }
}
