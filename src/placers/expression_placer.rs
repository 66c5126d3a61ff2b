use super::{activation_call, MutantPlacer, PlaceError, PlacedMutant};
use crate::{
    ast::{Expr, ExprKind, NodeMut, ParentContext, Replacement, Target},
    options::InstrumenterOptions,
};

/// Weaves expression mutants into a conditional chain:
/// `helper("0") ? m0 : helper("1") ? m1 : original`.
pub struct ExpressionPlacer;

impl MutantPlacer for ExpressionPlacer {
    fn name(&self) -> &'static str {
        "ExpressionPlacer"
    }

    fn can_place(&self, target: Target<'_>, parent: &ParentContext) -> bool {
        if !matches!(target, Target::Expr(_)) {
            return false;
        }
        // positions where a parenthesized conditional is not a valid
        // substitute for the original expression
        !matches!(
            parent,
            ParentContext::Callee { .. }
                | ParentContext::AssignTarget
                | ParentContext::UpdateArg
        )
    }

    fn place(
        &self,
        node: NodeMut<'_>,
        mutants: &[PlacedMutant],
        options: &InstrumenterOptions,
    ) -> Result<(), PlaceError> {
        let NodeMut::Expr(expr) = node else {
            return Err(PlaceError::shape_mismatch(self.name()));
        };

        let span = expr.span;
        let mut woven = std::mem::replace(expr, Expr::new(ExprKind::Null));
        for mutant in mutants.iter().rev() {
            let Replacement::Expr(branch) = &mutant.replacement else {
                return Err(PlaceError::shape_mismatch(self.name()));
            };
            woven = Expr::conditional(
                activation_call(options, mutant.id),
                branch.clone(),
                woven,
            );
        }
        *expr = woven.with_span(span);
        Ok(())
    }
}
