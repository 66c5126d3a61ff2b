use crate::{mutant::MutantId, source::Location};
use itertools::Itertools;
use thiserror::Error;

/// Failures that abort the transform of a single file. Other files are
/// unaffected; the orchestration layer decides whether to continue.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// No placement strategy accepted an anchor that holds pending mutants.
    /// Dropping mutants silently would corrupt mutation-score accounting, so
    /// this is fatal for the file.
    #[error(
        "cannot place mutant(s) [{}] at {file}:{}:{}: {reason}",
        ids.iter().join(", "),
        location.start.line,
        location.start.column
    )]
    Placement {
        file: String,
        location: Location,
        ids: Vec<MutantId>,
        reason: String,
    },
}

/// Configuration problems, detected when options are built and never
/// mid-traversal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mutation level '{level}' references unknown mutator family '{family}'")]
    UnknownFamily { level: String, family: String },

    #[error("mutation level '{level}' references operator '{operator}' which does not belong to family '{family}'")]
    UnknownOperator {
        level: String,
        family: String,
        operator: String,
    },

    #[error("excluded mutation '{0}' is not a known mutator family or mutation operator")]
    UnknownExcludedMutation(String),
}

/// Returned by the external regex-pattern oracle when a pattern cannot be
/// parsed. Recovered locally: logged and treated as "no candidates".
#[derive(Debug, Error)]
#[error("unparseable regex pattern: {0}")]
pub struct PatternError(pub String);
