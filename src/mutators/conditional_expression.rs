use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{
    BinaryOp, Expr, ExprKind, LogicalOp, ParentContext, Replacement, StmtKind, Target,
};

pub const NAME: &str = "ConditionalExpression";

pub const OPERATORS: &[&str] = &[
    "ConditionalExpression_IfCondition_ToTrue",
    "ConditionalExpression_IfCondition_ToFalse",
    "ConditionalExpression_WhileCondition_ToFalse",
    "ConditionalExpression_DoWhileCondition_ToFalse",
    "ConditionalExpression_ForCondition_ToFalse",
    "ConditionalExpression_BooleanExpression_ToTrue",
    "ConditionalExpression_BooleanExpression_ToFalse",
    "ConditionalExpression_SwitchCaseBody_Removal",
];

pub struct ConditionalExpressionMutator;

impl NodeMutator for ConditionalExpressionMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        match ctx.target {
            Target::Expr(expr) => mutate_expr(expr, ctx.parent, enabled),
            Target::Stmt(_) => mutate_stmt(ctx, enabled),
            Target::Case(case) => {
                if case.consequent.is_empty() {
                    return Vec::new();
                }
                let operator = "ConditionalExpression_SwitchCaseBody_Removal";
                if !enabled.allows(operator) {
                    return Vec::new();
                }
                let mut replacement = case.clone();
                replacement.consequent.clear();
                vec![Mutable {
                    replacement: Replacement::Case(replacement),
                    operator,
                }]
            }
        }
    }
}

fn mutate_expr(expr: &Expr, parent: &ParentContext, enabled: Enabled<'_>) -> Vec<Mutable> {
    let candidates: &[(bool, &str)] = match parent {
        ParentContext::IfTest => &[
            (true, "ConditionalExpression_IfCondition_ToTrue"),
            (false, "ConditionalExpression_IfCondition_ToFalse"),
        ],
        ParentContext::WhileTest => &[(false, "ConditionalExpression_WhileCondition_ToFalse")],
        ParentContext::DoWhileTest => &[(false, "ConditionalExpression_DoWhileCondition_ToFalse")],
        ParentContext::ForTest => &[(false, "ConditionalExpression_ForCondition_ToFalse")],
        _ => {
            if !is_boolean_expr(expr) {
                return Vec::new();
            }
            // under a logical parent, one of the two constants is a no-op
            match parent {
                ParentContext::LogicalOperand(LogicalOp::Or) => {
                    &[(false, "ConditionalExpression_BooleanExpression_ToFalse")]
                }
                ParentContext::LogicalOperand(LogicalOp::And) => {
                    &[(true, "ConditionalExpression_BooleanExpression_ToTrue")]
                }
                _ => &[
                    (true, "ConditionalExpression_BooleanExpression_ToTrue"),
                    (false, "ConditionalExpression_BooleanExpression_ToFalse"),
                ],
            }
        }
    };

    candidates
        .iter()
        .filter(|(_, operator)| enabled.allows(operator))
        .map(|(value, operator)| Mutable::expr(Expr::bool_lit(*value), *operator))
        .collect()
}

/// A `for` loop without a test has no expression to visit, so the loop itself
/// becomes the target: the replacement is the same loop with a `false` test.
fn mutate_stmt(ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
    let Target::Stmt(stmt) = ctx.target else {
        return Vec::new();
    };
    let StmtKind::For { test: None, .. } = &stmt.kind else {
        return Vec::new();
    };
    let operator = "ConditionalExpression_ForCondition_ToFalse";
    if !enabled.allows(operator) {
        return Vec::new();
    }

    let mut replacement = stmt.clone();
    if let StmtKind::For { test, .. } = &mut replacement.kind {
        *test = Some(Expr::bool_lit(false));
    }
    vec![Mutable {
        replacement: Replacement::Stmt(replacement),
        operator,
    }]
}

/// The closed operator list that marks an expression as boolean-valued.
/// `??` is deliberately absent: its operands are not boolean in general.
fn is_boolean_expr(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Binary { op, .. } => matches!(
            op,
            BinaryOp::Eq
                | BinaryOp::Ne
                | BinaryOp::StrictEq
                | BinaryOp::StrictNe
                | BinaryOp::Lt
                | BinaryOp::Le
                | BinaryOp::Gt
                | BinaryOp::Ge
        ),
        ExprKind::Logical { op, .. } => matches!(op, LogicalOp::And | LogicalOp::Or),
        _ => false,
    }
}
