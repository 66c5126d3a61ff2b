use crate::{
    ast::{Expr, ParentContext, Replacement, Target},
    mutators::{Enabled, Mutable, MutationContext, NodeMutator},
    options::InstrumenterOptions,
};

/// Runs a mutator against one node with everything enabled.
pub fn mutate(
    mutator: &dyn NodeMutator,
    target: Target<'_>,
    parent: &ParentContext,
    options: &InstrumenterOptions,
) -> Vec<Mutable> {
    mutator.mutate(
        MutationContext {
            target,
            parent,
            options,
        },
        Enabled::All,
    )
}

/// Shorthand for expression targets in a neutral parent position.
pub fn mutate_expr(mutator: &dyn NodeMutator, expr: &Expr) -> Vec<Mutable> {
    mutate(
        mutator,
        Target::Expr(expr),
        &ParentContext::VarInit,
        &InstrumenterOptions::default(),
    )
}

pub fn operators(mutables: &[Mutable]) -> Vec<&'static str> {
    mutables.iter().map(|m| m.operator).collect()
}

pub fn expr_replacement(mutable: &Mutable) -> &Expr {
    match &mutable.replacement {
        Replacement::Expr(expr) => expr,
        other => panic!("expected an expression replacement, got {other:?}"),
    }
}

/// Asserts that restricting the family to `only` yields exactly the subset of
/// the unrestricted candidates tagged with those operators.
pub fn assert_level_filtering(
    mutator: &dyn NodeMutator,
    target: Target<'_>,
    parent: &ParentContext,
    only: &[&str],
) {
    let options = InstrumenterOptions::default();
    let ctx = MutationContext {
        target,
        parent,
        options: &options,
    };
    let all = mutator.mutate(ctx, Enabled::All);
    let restriction: Vec<String> = only.iter().map(|s| (*s).to_string()).collect();
    let restricted = mutator.mutate(ctx, Enabled::Only(&restriction));

    let expected: Vec<&'static str> = all
        .iter()
        .map(|m| m.operator)
        .filter(|op| only.contains(op))
        .collect();
    assert_eq!(operators(&restricted), expected);
}
