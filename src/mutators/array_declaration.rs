use super::{Enabled, Mutable, MutationContext, NodeMutator};
use crate::ast::{CalleeHint, Expr, ExprKind, Target};

pub const NAME: &str = "ArrayDeclaration";

/// Element used to fill an empty array so the mutant is observable.
pub const SENTINEL: &str = "Stryker was here";

pub const OPERATORS: &[&str] = &[
    "ArrayDeclaration_EmptyArrayLiteral_ToFilledArrayLiteral",
    "ArrayDeclaration_FilledArrayLiteral_ToEmptyArrayLiteral",
    "ArrayDeclaration_EmptyArrayConstructor_ToFilledArrayConstructor",
    "ArrayDeclaration_FilledArrayConstructor_ToEmptyArrayConstructor",
];

pub struct ArrayDeclarationMutator;

impl NodeMutator for ArrayDeclarationMutator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mutate(&self, ctx: MutationContext<'_>, enabled: Enabled<'_>) -> Vec<Mutable> {
        let Target::Expr(expr) = ctx.target else {
            return Vec::new();
        };

        let (replacement, operator) = match &expr.kind {
            ExprKind::Array(elements) => {
                if elements.is_empty() {
                    (
                        Expr::array(vec![Expr::string(SENTINEL)]),
                        "ArrayDeclaration_EmptyArrayLiteral_ToFilledArrayLiteral",
                    )
                } else {
                    (
                        Expr::array(Vec::new()),
                        "ArrayDeclaration_FilledArrayLiteral_ToEmptyArrayLiteral",
                    )
                }
            }
            // `Array(...)` and `new Array(...)` behave like the literal form.
            ExprKind::Call { callee, args, .. } | ExprKind::New { callee, args }
                if CalleeHint::of(callee) == CalleeHint::ArrayCtor =>
            {
                let (new_args, operator) = if args.is_empty() {
                    (
                        vec![Expr::array(vec![Expr::string(SENTINEL)])],
                        "ArrayDeclaration_EmptyArrayConstructor_ToFilledArrayConstructor",
                    )
                } else {
                    (
                        Vec::new(),
                        "ArrayDeclaration_FilledArrayConstructor_ToEmptyArrayConstructor",
                    )
                };
                let mut repl = expr.clone();
                match &mut repl.kind {
                    ExprKind::Call { args, .. } | ExprKind::New { args, .. } => *args = new_args,
                    _ => unreachable!(),
                }
                (repl, operator)
            }
            _ => return Vec::new(),
        };

        if !enabled.allows(operator) {
            return Vec::new();
        }
        vec![Mutable::expr(replacement, operator)]
    }
}
