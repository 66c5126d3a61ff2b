//! The collected mutant record and the id-assigning collector.

use serde::Serialize;

use crate::{ast::Replacement, source::Location};

/// Mutant ids are dense and sequential per file, starting at 0. The runtime
/// activation predicate receives them as strings.
pub type MutantId = u32;

/// One collected mutant: where it applies, which operator produced it, and
/// the replacement node. The replacement is woven into the tree rather than
/// reported, so it is skipped when serializing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mutant {
    pub id: MutantId,
    pub origin_file: String,
    pub location: Location,
    pub operator: &'static str,
    /// Present iff the mutant was suppressed; it still appears in reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_reason: Option<String>,
    #[serde(skip)]
    pub replacement: Replacement,
}

impl Mutant {
    pub fn is_ignored(&self) -> bool {
        self.ignore_reason.is_some()
    }
}

/// Assigns ids in collection order and owns the growing mutant list.
#[derive(Debug, Default)]
pub struct MutantCollector {
    mutants: Vec<Mutant>,
}

impl MutantCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(
        &mut self,
        origin_file: &str,
        location: Location,
        operator: &'static str,
        replacement: Replacement,
        ignore_reason: Option<String>,
    ) -> MutantId {
        let id = self.mutants.len() as MutantId;
        self.mutants.push(Mutant {
            id,
            origin_file: origin_file.to_owned(),
            location,
            operator,
            ignore_reason,
            replacement,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.mutants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutants.is_empty()
    }

    pub fn into_mutants(self) -> Vec<Mutant> {
        self.mutants
    }
}
