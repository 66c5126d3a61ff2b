use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{CalleeHint, Expr, ExprKind, ParentContext, Target};

pub const NAME: &str = "StringLiteral";

pub const SENTINEL: &str = "Stryker was here!";

pub const OPERATORS: &[&str] = &[
    "StringLiteral_EmptyStringLiteral_ToFilledStringLiteral",
    "StringLiteral_FilledStringLiteral_ToEmptyStringLiteral",
    "StringLiteral_EmptyInterpolatedString_ToFilledInterpolatedString",
    "StringLiteral_FilledInterpolatedString_ToEmptyInterpolatedString",
];

pub struct StringLiteralMutator;

impl NodeMutator for StringLiteralMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };

        match &expr.kind {
            ExprKind::Template { quasis, exprs } => {
                let is_empty = exprs.is_empty() && quasis.iter().all(|quasi| quasi.is_empty());
                let (replacement, operator) = if is_empty {
                    (
                        Expr::template(SENTINEL),
                        "StringLiteral_EmptyInterpolatedString_ToFilledInterpolatedString",
                    )
                } else {
                    (
                        Expr::template(""),
                        "StringLiteral_FilledInterpolatedString_ToEmptyInterpolatedString",
                    )
                };
                if enabled.allows(operator) {
                    vec![Mutable::expr(replacement, operator)]
                } else {
                    Vec::new()
                }
            }
            ExprKind::Str(value) => {
                if !is_valid_parent(ctx.parent) {
                    return Vec::new();
                }
                let (replacement, operator) = if value.is_empty() {
                    (
                        Expr::string(SENTINEL),
                        "StringLiteral_EmptyStringLiteral_ToFilledStringLiteral",
                    )
                } else {
                    (
                        Expr::string(""),
                        "StringLiteral_FilledStringLiteral_ToEmptyStringLiteral",
                    )
                };
                if enabled.allows(operator) {
                    vec![Mutable::expr(replacement, operator)]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }
}

/// Plain strings are left alone in positions where the text has declarative
/// meaning: directive prologues (`"use strict";`) and `require`/`Symbol`
/// arguments. Import/export specifiers and member keys never reach the
/// traversal in the first place.
fn is_valid_parent(parent: &ParentContext) -> bool {
    !matches!(
        parent,
        ParentContext::ExprStmt
            | ParentContext::Argument {
                callee: CalleeHint::Require | CalleeHint::Symbol,
                ..
            }
    )
}
