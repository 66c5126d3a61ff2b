//! Mutation levels: named profiles that restrict each mutator family to a
//! subset of its operators.
//!
//! The policy is strict allow-listing. Without a level every operator runs.
//! With a level, a family runs only the operators its entry lists, and a
//! family that is absent (or lists nothing) does not run at all.

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{catalog, error::ConfigError};

/// A named allow-list of operators per mutator family.
///
/// Serialized with the family lists flattened next to `name`:
///
/// ```json
/// { "name": "essential", "BooleanLiteral": ["BooleanLiteral_TrueLiteral_ToFalseLiteral"] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationLevel {
    pub name: String,
    #[serde(flatten)]
    pub families: BTreeMap<String, Vec<String>>,
}

impl MutationLevel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            families: BTreeMap::new(),
        }
    }

    /// Adds or replaces the allow-list of one family.
    pub fn with_family<I, S>(mut self, family: impl Into<String>, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families
            .insert(family.into(), operators.into_iter().map(Into::into).collect());
        self
    }

    /// The enabled operators of `family`: `None` when the family is disabled
    /// under this level.
    pub fn enabled_operators(&self, family: &str) -> Option<&[String]> {
        match self.families.get(family) {
            Some(ops) if !ops.is_empty() => Some(ops),
            _ => None,
        }
    }

    /// Checks every family key and operator id against the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (family, operators) in &self.families {
            let Some(known) = catalog::operators_of(family) else {
                return Err(ConfigError::UnknownFamily {
                    level: self.name.clone(),
                    family: family.clone(),
                });
            };
            for operator in operators {
                if !known.contains(&operator.as_str()) {
                    return Err(ConfigError::UnknownOperator {
                        level: self.name.clone(),
                        family: family.clone(),
                        operator: operator.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The built-in level profiles, parsed once from the embedded catalog.
pub fn default_levels() -> &'static [MutationLevel] {
    static LEVELS: OnceLock<Vec<MutationLevel>> = OnceLock::new();
    LEVELS.get_or_init(|| {
        // the embedded asset is fixed at compile time and covered by tests
        serde_json::from_str(include_str!("default_mutation_levels.json"))
            .unwrap_or_default()
    })
}

/// Looks up a built-in level by name.
pub fn default_level(name: &str) -> Option<&'static MutationLevel> {
    default_levels().iter().find(|level| level.name == name)
}
