//! The instrumentation walk: collect mutants, then weave them into the tree
//! at their anchor nodes.
//!
//! The walk is a single recursive pass. On the way down it assigns each node
//! a pre-order index, tracks inline directives and ignorer scopes, runs every
//! mutator, and registers each surviving mutant against the nearest enclosing
//! anchor (a node some placement strategy accepted). On the way back up it
//! drains each anchor's registrations and hands them to that strategy, so
//! nested anchors are woven before their ancestors.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{child_at, children_mut, NodeMut, ParentContext, Program, Replacement, StmtKind, Target},
    error::InstrumentError,
    mutant::{Mutant, MutantCollector, MutantId},
    mutators::{Enabled, MutationContext, MUTATORS},
    options::InstrumenterOptions,
    placers::{MutantPlacer, PlacedMutant, PLACERS},
    source::{Location, SourceFile, SourceMap},
};

pub mod directive_bookkeeper;
pub mod ignorer_bookkeeper;

pub use directive_bookkeeper::{DirectiveBookkeeper, DEFAULT_REASON};
pub use ignorer_bookkeeper::{IgnorerBookkeeper, MutantIgnorer};

/// Rewrites `program` in place, weaving every non-ignored mutant into a
/// runtime-dispatchable fragment, and returns all collected mutants (ignored
/// ones included, marked with their reason).
pub fn instrument(
    program: &mut Program,
    file: &SourceFile,
    options: &InstrumenterOptions,
) -> Result<Vec<Mutant>, InstrumentError> {
    let mut transformer = Transformer::new(file, options, true);
    transformer.run(program)?;
    let mutants = transformer.collector.into_mutants();
    debug!(
        file = file.name,
        collected = mutants.len(),
        ignored = mutants.iter().filter(|m| m.is_ignored()).count(),
        "instrumented file"
    );
    Ok(mutants)
}

/// Runs the identical walk without rewriting anything and returns how many
/// mutants `instrument` would collect.
pub fn count_mutants(
    program: &mut Program,
    file: &SourceFile,
    options: &InstrumenterOptions,
) -> Result<usize, InstrumentError> {
    let mut transformer = Transformer::new(file, options, false);
    transformer.run(program)?;
    Ok(transformer.collector.len())
}

/// A mutant waiting for its anchor's exit, with the child path from the
/// anchor down to the mutated node.
#[derive(Debug)]
struct Pending {
    id: MutantId,
    rel_path: Vec<usize>,
    replacement: Replacement,
}

struct Anchor {
    /// Pre-order index, the placement-map key.
    index: u32,
    /// Length of the walk path at the anchor; the suffix beyond it is a
    /// mutant's path relative to this anchor.
    path_len: usize,
    placer: &'static dyn MutantPlacer,
}

struct Transformer<'a> {
    file: &'a SourceFile,
    map: SourceMap,
    options: &'a InstrumenterOptions,
    directives: DirectiveBookkeeper,
    ignorers: IgnorerBookkeeper,
    collector: MutantCollector,
    placements: HashMap<u32, Vec<Pending>>,
    anchors: Vec<Anchor>,
    path: Vec<usize>,
    next_index: u32,
    /// False for the counting walk: mutants are collected but never woven.
    place: bool,
}

impl<'a> Transformer<'a> {
    fn new(file: &'a SourceFile, options: &'a InstrumenterOptions, place: bool) -> Self {
        let map = SourceMap::new(&file.text);
        let directives = DirectiveBookkeeper::new(file, &map);
        Self {
            file,
            map,
            options,
            directives,
            ignorers: IgnorerBookkeeper::default(),
            collector: MutantCollector::new(),
            placements: HashMap::new(),
            anchors: Vec::new(),
            path: Vec::new(),
            next_index: 0,
            place,
        }
    }

    fn run(&mut self, program: &mut Program) -> Result<(), InstrumentError> {
        for (index, stmt) in program.body.iter_mut().enumerate() {
            self.path.push(index);
            self.visit(NodeMut::Stmt(stmt), &ParentContext::Root)?;
            self.path.pop();
        }
        // every registration is drained at its anchor's exit
        if !self.placements.is_empty() {
            let ids = self
                .placements
                .drain()
                .flat_map(|(_, pendings)| pendings)
                .map(|pending| pending.id)
                .collect();
            return Err(self.placement_error(
                Location::new(self.map.position(0), self.map.position(0)),
                ids,
                "mutants were registered against an anchor that never completed",
            ));
        }
        Ok(())
    }

    fn visit(&mut self, mut node: NodeMut<'_>, parent: &ParentContext) -> Result<(), InstrumentError> {
        if let Target::Stmt(stmt) = node.target() {
            if matches!(
                stmt.kind,
                StmtKind::Import { .. } | StmtKind::Export { .. } | StmtKind::TypeAlias { .. }
            ) {
                return Ok(());
            }
        }

        let index = self.next_index;
        self.next_index += 1;
        let location = self.map.location(node.span());
        let depth = self.path.len();

        self.ignorers
            .enter(depth, node.target(), parent, &self.options.ignorers);

        let placer = PLACERS
            .iter()
            .copied()
            .find(|placer| placer.can_place(node.target(), parent));
        if let Some(placer) = placer {
            self.anchors.push(Anchor {
                index,
                path_len: depth,
                placer,
            });
        }

        if self.options.mutate.covers(&location) {
            self.mutate_node(node.target(), parent, location)?;
        }

        for (seg, (child_parent, child)) in children_mut(node.reborrow()).into_iter().enumerate() {
            self.path.push(seg);
            self.visit(child, &child_parent)?;
            self.path.pop();
        }

        if placer.is_some() {
            if let Some(anchor) = self.anchors.pop() {
                self.weave(node, &anchor, location)?;
            }
        }

        self.ignorers.leave(depth);
        Ok(())
    }

    /// Runs every mutator on one node and registers the surviving mutants.
    fn mutate_node(
        &mut self,
        target: Target<'_>,
        parent: &ParentContext,
        location: Location,
    ) -> Result<(), InstrumentError> {
        for mutator in MUTATORS {
            let enabled = match &self.options.level {
                None => Enabled::All,
                Some(level) => match level.enabled_operators(mutator.name()) {
                    Some(operators) => Enabled::Only(operators),
                    // the level disables this family entirely
                    None => continue,
                },
            };
            let ctx = MutationContext {
                target,
                parent,
                options: self.options,
            };

            for mutable in mutator.mutate(ctx, enabled) {
                let reason = self.ignore_reason(mutator.name(), mutable.operator, location);
                let id = self.collector.collect(
                    &self.file.name,
                    location,
                    mutable.operator,
                    mutable.replacement.clone(),
                    reason.clone(),
                );
                if reason.is_some() || !self.place {
                    continue;
                }

                let Some(anchor) = self.anchors.last() else {
                    return Err(self.placement_error(
                        location,
                        vec![id],
                        "no enclosing node accepts a placement strategy",
                    ));
                };
                self.placements.entry(anchor.index).or_default().push(Pending {
                    id,
                    rel_path: self.path[anchor.path_len..].to_vec(),
                    replacement: mutable.replacement,
                });
            }
        }
        Ok(())
    }

    /// The suppression reason in force for one candidate, if any. Inline
    /// directives win over the global excluded list, which wins over ignorer
    /// contexts.
    fn ignore_reason(
        &self,
        family: &'static str,
        operator: &'static str,
        location: Location,
    ) -> Option<String> {
        self.directives
            .find_ignore_reason(location.start.line, family, operator)
            .or_else(|| {
                self.options
                    .excluded_mutations
                    .iter()
                    .find(|entry| *entry == family || *entry == operator)
                    .map(|entry| format!("Ignored because of excluded mutation \"{entry}\""))
            })
            .or_else(|| self.ignorers.active_reason().map(ToOwned::to_owned))
    }

    /// Drains an anchor's registrations, materializes each branch and hands
    /// them to the anchor's strategy.
    fn weave(
        &mut self,
        mut node: NodeMut<'_>,
        anchor: &Anchor,
        location: Location,
    ) -> Result<(), InstrumentError> {
        let Some(pendings) = self.placements.remove(&anchor.index) else {
            return Ok(());
        };

        let mut placed = Vec::with_capacity(pendings.len());
        for pending in &pendings {
            let replacement = match build_branch(node.reborrow(), pending) {
                Ok(replacement) => replacement,
                Err(reason) => {
                    return Err(self.placement_error(location, vec![pending.id], reason))
                }
            };
            placed.push(PlacedMutant {
                id: pending.id,
                replacement,
            });
        }

        anchor
            .placer
            .place(node, &placed, self.options)
            .map_err(|err| {
                self.placement_error(
                    location,
                    placed.iter().map(|p| p.id).collect(),
                    &err.reason,
                )
            })
    }

    fn placement_error(&self, location: Location, mut ids: Vec<MutantId>, reason: &str) -> InstrumentError {
        ids.sort_unstable();
        InstrumentError::Placement {
            file: self.file.name.clone(),
            location,
            ids,
            reason: reason.to_owned(),
        }
    }
}

/// The branch taken when `pending` is active: a copy of the anchor subtree
/// with the mutated node swapped for its replacement. Sibling subtrees keep
/// any scaffolding woven by nested anchors; those mutants are never active at
/// the same time, so the branch behaves exactly like the single mutation.
fn build_branch(anchor: NodeMut<'_>, pending: &Pending) -> Result<Replacement, &'static str> {
    if pending.rel_path.is_empty() {
        return Ok(pending.replacement.clone());
    }

    let mut branch = anchor.target().to_replacement();
    let mut cursor = match &mut branch {
        Replacement::Expr(expr) => NodeMut::Expr(expr),
        Replacement::Stmt(stmt) => NodeMut::Stmt(stmt),
        Replacement::Case(case) => NodeMut::Case(case),
    };
    for seg in &pending.rel_path {
        cursor = child_at(cursor, *seg).ok_or("recorded child path no longer resolves")?;
    }
    match (cursor, &pending.replacement) {
        (NodeMut::Expr(slot), Replacement::Expr(replacement)) => *slot = replacement.clone(),
        (NodeMut::Stmt(slot), Replacement::Stmt(replacement)) => *slot = replacement.clone(),
        (NodeMut::Case(slot), Replacement::Case(replacement)) => *slot = replacement.clone(),
        _ => return Err("replacement does not match the shape of the mutated node"),
    }
    Ok(branch)
}
