//! Node mutators, one per construct family.
//!
//! A mutator is a pure function of the traversed node, its parent context and
//! the enabled-operator set for its family: it proposes finite candidate
//! replacements, each tagged with the operator id that produced it, and never
//! touches the tree it reads.

use crate::{
    ast::{ParentContext, Replacement, Target},
    options::InstrumenterOptions,
};

pub mod arithmetic_operator;
pub mod array_declaration;
pub mod arrow_function;
pub mod assignment_operator;
pub mod boolean_literal;
pub mod conditional_expression;
pub mod equality_operator;
pub mod logical_operator;
pub mod method_expression;
pub mod object_literal;
pub mod optional_chaining;
pub mod regex;
pub mod string_literal;
pub mod unary_operator;
pub mod update_operator;

#[cfg(test)]
mod tests;

/// Everything a mutator may look at for one node.
#[derive(Clone, Copy)]
pub struct MutationContext<'a> {
    pub target: Target<'a>,
    pub parent: &'a ParentContext,
    pub options: &'a InstrumenterOptions,
}

/// The enabled operator ids for one family, resolved from the active mutation
/// level. `All` means no level is configured.
#[derive(Clone, Copy, Debug)]
pub enum Enabled<'a> {
    All,
    Only(&'a [String]),
}

impl Enabled<'_> {
    pub fn allows(&self, operator: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.iter().any(|id| id == operator),
        }
    }
}

/// One candidate replacement, tagged with the operator that produced it.
#[derive(Clone, Debug)]
pub struct Mutable {
    pub replacement: Replacement,
    pub operator: &'static str,
}

impl Mutable {
    pub fn expr(replacement: crate::ast::Expr, operator: &'static str) -> Self {
        Self {
            replacement: Replacement::Expr(replacement),
            operator,
        }
    }
}

pub trait NodeMutator: Send + Sync {
    /// The family name, also the key used in mutation levels and directives.
    fn name(&self) -> &'static str;

    /// Propose candidate replacements for `ctx.target`. Must not yield a
    /// candidate identical to the input, and must honor `enabled`.
    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable>;
}

/// All mutators, in the fixed order that drives mutant id assignment within a
/// single node.
pub static MUTATORS: &[&dyn NodeMutator] = &[
    &arithmetic_operator::ArithmeticOperatorMutator,
    &array_declaration::ArrayDeclarationMutator,
    &arrow_function::ArrowFunctionMutator,
    &assignment_operator::AssignmentOperatorMutator,
    &boolean_literal::BooleanLiteralMutator,
    &conditional_expression::ConditionalExpressionMutator,
    &equality_operator::EqualityOperatorMutator,
    &logical_operator::LogicalOperatorMutator,
    &method_expression::MethodExpressionMutator,
    &object_literal::ObjectLiteralMutator,
    &optional_chaining::OptionalChainingMutator,
    &regex::RegexMutator,
    &string_literal::StringLiteralMutator,
    &unary_operator::UnaryOperatorMutator,
    &update_operator::UpdateOperatorMutator,
];
