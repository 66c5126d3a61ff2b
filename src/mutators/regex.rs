use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{CalleeHint, Expr, ExprKind, ParentContext, Target};

pub const NAME: &str = "Regex";

pub const OPERATORS: &[&str] = &["Regex_Pattern_Alteration"];

pub struct RegexMutator;

impl NodeMutator for RegexMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let operator = "Regex_Pattern_Alteration";
        if !enabled.allows(operator) {
            return Vec::new();
        }
        let Some(oracle) = ctx.options.regex_oracle.as_ref() else {
            return Vec::new();
        };
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };

        // A regex literal, or the pattern string of `new RegExp(pattern, flags?)`.
        let (pattern, flags, literal) = match (&expr.kind, ctx.parent) {
            (ExprKind::Regex { pattern, flags }, _) => (pattern, Some(flags.as_str()), true),
            (
                ExprKind::Str(pattern),
                ParentContext::Argument {
                    callee: CalleeHint::RegExpCtor,
                    index: 0,
                    regex_flags,
                    new_expr: true,
                },
            ) => (pattern, regex_flags.as_deref(), false),
            _ => return Vec::new(),
        };
        // nothing to alter in an empty pattern, skip the oracle round-trip
        if pattern.is_empty() {
            return Vec::new();
        }

        let alterations = match oracle(pattern, flags) {
            Ok(alterations) => alterations,
            Err(err) => {
                tracing::error!(
                    pattern = %pattern,
                    error = %err,
                    "unable to generate regex mutants, pattern left unmutated"
                );
                return Vec::new();
            }
        };

        alterations
            .into_iter()
            .map(|altered| {
                let replacement = if literal {
                    Expr::regex(altered, flags.unwrap_or_default())
                } else {
                    Expr::string(altered)
                };
                Mutable::expr(replacement, operator)
            })
            .collect()
    }
}
