use super::{activation_call, MutantPlacer, PlaceError, PlacedMutant};
use crate::{
    ast::{NodeMut, ParentContext, Replacement, Stmt, Target},
    options::InstrumenterOptions,
};

/// Weaves switch-case mutants by replacing the case consequent with a single
/// `if`/`else` chain; the case test itself is never rewritten.
pub struct SwitchCasePlacer;

impl MutantPlacer for SwitchCasePlacer {
    fn name(&self) -> &'static str {
        "SwitchCasePlacer"
    }

    fn can_place(&self, target: Target<'_>, _parent: &ParentContext) -> bool {
        matches!(target, Target::Case(_))
    }

    fn place(
        &self,
        node: NodeMut<'_>,
        mutants: &[PlacedMutant],
        options: &InstrumenterOptions,
    ) -> Result<(), PlaceError> {
        let NodeMut::Case(case) = node else {
            return Err(PlaceError::shape_mismatch(self.name()));
        };
        if mutants.is_empty() {
            return Ok(());
        }

        let original = std::mem::take(&mut case.consequent);
        let mut woven = Stmt::block(original);
        for mutant in mutants.iter().rev() {
            let Replacement::Case(branch) = &mutant.replacement else {
                return Err(PlaceError::shape_mismatch(self.name()));
            };
            woven = Stmt::if_stmt(
                activation_call(options, mutant.id),
                Stmt::block(branch.consequent.clone()),
                Some(woven),
            );
        }
        case.consequent = vec![woven];
        Ok(())
    }
}
