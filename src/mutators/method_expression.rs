use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{ExprKind, Target};

pub const NAME: &str = "MethodExpression";

enum Effect {
    /// Swap the method for its counterpart, keeping receiver and arguments.
    Rename(&'static str),
    /// Drop the call entirely and substitute the receiver.
    Remove,
}

const TABLE: &[(&str, Effect, &str)] = &[
    (
        "endsWith",
        Effect::Rename("startsWith"),
        "MethodExpression_EndsWith_Negation",
    ),
    (
        "startsWith",
        Effect::Rename("endsWith"),
        "MethodExpression_StartsWith_Negation",
    ),
    ("every", Effect::Rename("some"), "MethodExpression_Every_Negation"),
    ("some", Effect::Rename("every"), "MethodExpression_Some_Negation"),
    (
        "toLocaleLowerCase",
        Effect::Rename("toLocaleUpperCase"),
        "MethodExpression_ToLocaleLowerCase_Negation",
    ),
    (
        "toLocaleUpperCase",
        Effect::Rename("toLocaleLowerCase"),
        "MethodExpression_ToLocaleUpperCase_Negation",
    ),
    (
        "toLowerCase",
        Effect::Rename("toUpperCase"),
        "MethodExpression_ToLowerCase_Negation",
    ),
    (
        "toUpperCase",
        Effect::Rename("toLowerCase"),
        "MethodExpression_ToUpperCase_Negation",
    ),
    (
        "trimEnd",
        Effect::Rename("trimStart"),
        "MethodExpression_TrimEnd_Negation",
    ),
    (
        "trimStart",
        Effect::Rename("trimEnd"),
        "MethodExpression_TrimStart_Negation",
    ),
    ("min", Effect::Rename("max"), "MethodExpression_Min_Negation"),
    ("max", Effect::Rename("min"), "MethodExpression_Max_Negation"),
    ("charAt", Effect::Remove, "MethodExpression_CharAt_Removal"),
    ("filter", Effect::Remove, "MethodExpression_Filter_Removal"),
    ("reverse", Effect::Remove, "MethodExpression_Reverse_Removal"),
    ("slice", Effect::Remove, "MethodExpression_Slice_Removal"),
    ("sort", Effect::Remove, "MethodExpression_Sort_Removal"),
    ("substr", Effect::Remove, "MethodExpression_Substr_Removal"),
    ("substring", Effect::Remove, "MethodExpression_Substring_Removal"),
    ("trim", Effect::Remove, "MethodExpression_Trim_Removal"),
];

pub const OPERATORS: &[&str] = &[
    "MethodExpression_EndsWith_Negation",
    "MethodExpression_StartsWith_Negation",
    "MethodExpression_Every_Negation",
    "MethodExpression_Some_Negation",
    "MethodExpression_ToLocaleLowerCase_Negation",
    "MethodExpression_ToLocaleUpperCase_Negation",
    "MethodExpression_ToLowerCase_Negation",
    "MethodExpression_ToUpperCase_Negation",
    "MethodExpression_TrimEnd_Negation",
    "MethodExpression_TrimStart_Negation",
    "MethodExpression_Min_Negation",
    "MethodExpression_Max_Negation",
    "MethodExpression_CharAt_Removal",
    "MethodExpression_Filter_Removal",
    "MethodExpression_Reverse_Removal",
    "MethodExpression_Slice_Removal",
    "MethodExpression_Sort_Removal",
    "MethodExpression_Substr_Removal",
    "MethodExpression_Substring_Removal",
    "MethodExpression_Trim_Removal",
];

pub struct MethodExpressionMutator;

impl NodeMutator for MethodExpressionMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        // a non-computed method call: `recv.name(...)` with optional markers
        let ExprKind::Call { callee, .. } = &expr.kind else {
            return Vec::new();
        };
        let ExprKind::Member {
            object,
            property,
            computed: false,
            ..
        } = &callee.kind
        else {
            return Vec::new();
        };
        let ExprKind::Ident(method) = &property.kind else {
            return Vec::new();
        };

        let Some((_, effect, operator)) = TABLE.iter().find(|(name, ..)| *name == method.as_str())
        else {
            return Vec::new();
        };
        if !enabled.allows(operator) {
            return Vec::new();
        }

        let replacement = match effect {
            Effect::Rename(to) => {
                let mut repl = expr.clone();
                if let ExprKind::Call { callee, .. } = &mut repl.kind {
                    if let ExprKind::Member { property, .. } = &mut callee.kind {
                        property.kind = ExprKind::Ident((*to).to_owned());
                    }
                }
                repl
            }
            Effect::Remove => (**object).clone(),
        };
        vec![Mutable::expr(replacement, operator)]
    }
}
