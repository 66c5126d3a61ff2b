//! Placement strategies: weave the collected mutants of one anchor node into
//! a single runtime-dispatchable fragment.
//!
//! Each strategy handles one node shape. At most one mutant is ever active at
//! runtime, selected by the activation helper, so every woven fragment keeps
//! the original behavior when no mutant (or another file's mutant) is active.

use crate::{
    ast::{Expr, NodeMut, ParentContext, Replacement, Target},
    mutant::MutantId,
    options::InstrumenterOptions,
};

mod expression_placer;
mod statement_placer;
mod switch_case_placer;

pub use expression_placer::ExpressionPlacer;
pub use statement_placer::StatementPlacer;
pub use switch_case_placer::SwitchCasePlacer;

/// A mutant ready for weaving: its id and the anchor-shaped branch to take
/// when it is active.
#[derive(Clone, Debug)]
pub struct PlacedMutant {
    pub id: MutantId,
    pub replacement: Replacement,
}

/// A strategy refused or failed to weave; the transformer turns this into a
/// file-level placement error.
#[derive(Debug)]
pub struct PlaceError {
    pub reason: String,
}

impl PlaceError {
    fn shape_mismatch(placer: &str) -> Self {
        Self {
            reason: format!("{placer} was handed a replacement of a different node shape"),
        }
    }
}

pub trait MutantPlacer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this strategy can weave mutants at `target` in position
    /// `parent`. Decided at node entry, before any mutant registers.
    fn can_place(&self, target: Target<'_>, parent: &ParentContext) -> bool;

    /// Rewrites `node` in place so that each mutant's branch is taken exactly
    /// when the activation helper selects its id.
    fn place(
        &self,
        node: NodeMut<'_>,
        mutants: &[PlacedMutant],
        options: &InstrumenterOptions,
    ) -> Result<(), PlaceError>;
}

/// All strategies, tried in order at node entry.
pub static PLACERS: &[&dyn MutantPlacer] = &[&ExpressionPlacer, &StatementPlacer, &SwitchCasePlacer];

/// `helper("<id>")`: the runtime predicate that activates one mutant.
fn activation_call(options: &InstrumenterOptions, id: MutantId) -> Expr {
    Expr::call(
        Expr::ident(options.activation_helper.as_str()),
        vec![Expr::string(id.to_string())],
    )
}
