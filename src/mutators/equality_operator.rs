use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{BinaryOp, ExprKind, Target};

pub const NAME: &str = "EqualityOperator";

/// Relational operators get a boundary variant and a negation variant;
/// (in)equality operators swap with their negation.
const TABLE: &[(BinaryOp, BinaryOp, &str)] = &[
    (
        BinaryOp::Lt,
        BinaryOp::Le,
        "EqualityOperator_LessThanOperator_Boundary",
    ),
    (
        BinaryOp::Lt,
        BinaryOp::Ge,
        "EqualityOperator_LessThanOperator_ToGreaterThanEqualOperator",
    ),
    (
        BinaryOp::Le,
        BinaryOp::Lt,
        "EqualityOperator_LessThanEqualOperator_Boundary",
    ),
    (
        BinaryOp::Le,
        BinaryOp::Gt,
        "EqualityOperator_LessThanEqualOperator_ToGreaterThanOperator",
    ),
    (
        BinaryOp::Gt,
        BinaryOp::Ge,
        "EqualityOperator_GreaterThanOperator_Boundary",
    ),
    (
        BinaryOp::Gt,
        BinaryOp::Le,
        "EqualityOperator_GreaterThanOperator_ToLessThanEqualOperator",
    ),
    (
        BinaryOp::Ge,
        BinaryOp::Gt,
        "EqualityOperator_GreaterThanEqualOperator_Boundary",
    ),
    (
        BinaryOp::Ge,
        BinaryOp::Lt,
        "EqualityOperator_GreaterThanEqualOperator_ToLessThanOperator",
    ),
    (
        BinaryOp::Eq,
        BinaryOp::Ne,
        "EqualityOperator_EqualityOperator_ToInequalityOperator",
    ),
    (
        BinaryOp::Ne,
        BinaryOp::Eq,
        "EqualityOperator_InequalityOperator_ToEqualityOperator",
    ),
    (
        BinaryOp::StrictEq,
        BinaryOp::StrictNe,
        "EqualityOperator_StrictEqualityOperator_ToStrictInequalityOperator",
    ),
    (
        BinaryOp::StrictNe,
        BinaryOp::StrictEq,
        "EqualityOperator_StrictInequalityOperator_ToStrictEqualityOperator",
    ),
];

pub const OPERATORS: &[&str] = &[
    "EqualityOperator_LessThanOperator_Boundary",
    "EqualityOperator_LessThanOperator_ToGreaterThanEqualOperator",
    "EqualityOperator_LessThanEqualOperator_Boundary",
    "EqualityOperator_LessThanEqualOperator_ToGreaterThanOperator",
    "EqualityOperator_GreaterThanOperator_Boundary",
    "EqualityOperator_GreaterThanOperator_ToLessThanEqualOperator",
    "EqualityOperator_GreaterThanEqualOperator_Boundary",
    "EqualityOperator_GreaterThanEqualOperator_ToLessThanOperator",
    "EqualityOperator_EqualityOperator_ToInequalityOperator",
    "EqualityOperator_InequalityOperator_ToEqualityOperator",
    "EqualityOperator_StrictEqualityOperator_ToStrictInequalityOperator",
    "EqualityOperator_StrictInequalityOperator_ToStrictEqualityOperator",
];

pub struct EqualityOperatorMutator;

impl NodeMutator for EqualityOperatorMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };
        let ExprKind::Binary { op, .. } = &expr.kind else {
            return Vec::new();
        };

        TABLE
            .iter()
            .filter(|(from, _, operator)| from == op && enabled.allows(operator))
            .map(|(_, to, operator)| {
                let mut replacement = expr.clone();
                if let ExprKind::Binary { op, .. } = &mut replacement.kind {
                    *op = *to;
                }
                Mutable::expr(replacement, operator)
            })
            .collect()
    }
}
