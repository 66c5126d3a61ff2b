use super::{activation_call, MutantPlacer, PlaceError, PlacedMutant};
use crate::{
    ast::{NodeMut, ParentContext, Replacement, Stmt, StmtKind, Target},
    options::InstrumenterOptions,
};

/// Weaves statement mutants into an `if`/`else if`/`else` chain, each branch
/// in its own block.
pub struct StatementPlacer;

impl MutantPlacer for StatementPlacer {
    fn name(&self) -> &'static str {
        "StatementPlacer"
    }

    fn can_place(&self, target: Target<'_>, parent: &ParentContext) -> bool {
        let Target::Stmt(stmt) = target else {
            return false;
        };
        // declarations are hoisted or scope-introducing and cannot move into
        // a conditional block; a for-loop init is not a statement position
        if matches!(
            stmt.kind,
            StmtKind::VarDecl { .. }
                | StmtKind::FunctionDecl { .. }
                | StmtKind::ClassDecl { .. }
                | StmtKind::Import { .. }
                | StmtKind::Export { .. }
                | StmtKind::TypeAlias { .. }
        ) {
            return false;
        }
        !matches!(parent, ParentContext::ForInit)
    }

    fn place(
        &self,
        node: NodeMut<'_>,
        mutants: &[PlacedMutant],
        options: &InstrumenterOptions,
    ) -> Result<(), PlaceError> {
        let NodeMut::Stmt(stmt) = node else {
            return Err(PlaceError::shape_mismatch(self.name()));
        };
        if mutants.is_empty() {
            return Ok(());
        }

        let span = stmt.span;
        let original = std::mem::replace(stmt, Stmt::new(StmtKind::Empty));
        let mut woven = Stmt::block(vec![original]);
        for mutant in mutants.iter().rev() {
            let Replacement::Stmt(branch) = &mutant.replacement else {
                return Err(PlaceError::shape_mismatch(self.name()));
            };
            woven = Stmt::if_stmt(
                activation_call(options, mutant.id),
                Stmt::block(vec![branch.clone()]),
                Some(woven),
            );
        }
        *stmt = woven.with_span(span);
        Ok(())
    }
}
