//! Instrumentation options, validated up front so the traversal itself can
//! never hit a configuration error.

use std::fmt;

use crate::{
    catalog,
    error::{ConfigError, PatternError},
    levels::MutationLevel,
    source::Location,
    transformer::MutantIgnorer,
};

/// External oracle that proposes altered regex patterns for a pattern/flags
/// pair. Regex mutation is dormant unless one is configured.
pub type RegexOracle =
    Box<dyn Fn(&str, Option<&str>) -> Result<Vec<String>, PatternError> + Send + Sync>;

pub const DEFAULT_ACTIVATION_HELPER: &str = "__mutantActive";

/// Which parts of a file are eligible for mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mutate {
    #[default]
    All,
    /// Only nodes overlapping at least one of these ranges.
    Ranges(Vec<Location>),
}

impl Mutate {
    pub fn covers(&self, location: &Location) -> bool {
        match self {
            Self::All => true,
            Self::Ranges(ranges) => ranges.iter().any(|range| range.overlaps(*location)),
        }
    }
}

pub struct InstrumenterOptions {
    /// Active mutation level; `None` enables every operator.
    pub level: Option<MutationLevel>,
    /// Family names or operator ids that are globally ignored.
    pub excluded_mutations: Vec<String>,
    pub mutate: Mutate,
    pub ignorers: Vec<Box<dyn MutantIgnorer>>,
    pub regex_oracle: Option<RegexOracle>,
    /// Name of the runtime predicate woven into every mutant branch.
    pub activation_helper: String,
}

impl Default for InstrumenterOptions {
    fn default() -> Self {
        Self {
            level: None,
            excluded_mutations: Vec::new(),
            mutate: Mutate::All,
            ignorers: Vec::new(),
            regex_oracle: None,
            activation_helper: DEFAULT_ACTIVATION_HELPER.to_owned(),
        }
    }
}

impl fmt::Debug for InstrumenterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumenterOptions")
            .field("level", &self.level)
            .field("excluded_mutations", &self.excluded_mutations)
            .field("mutate", &self.mutate)
            .field("ignorers", &self.ignorers.len())
            .field("regex_oracle", &self.regex_oracle.is_some())
            .field("activation_helper", &self.activation_helper)
            .finish()
    }
}

impl InstrumenterOptions {
    pub fn builder() -> InstrumenterOptionsBuilder {
        InstrumenterOptionsBuilder::default()
    }

    /// Whether the excluded-mutations list names this mutant's family or its
    /// exact operator id.
    pub fn is_excluded(&self, family: &str, operator: &str) -> bool {
        self.excluded_mutations
            .iter()
            .any(|entry| entry == family || entry == operator)
    }
}

#[derive(Default)]
pub struct InstrumenterOptionsBuilder {
    level: Option<MutationLevel>,
    excluded_mutations: Vec<String>,
    mutate: Mutate,
    ignorers: Vec<Box<dyn MutantIgnorer>>,
    regex_oracle: Option<RegexOracle>,
    activation_helper: Option<String>,
}

impl InstrumenterOptionsBuilder {
    pub fn level(mut self, level: MutationLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn excluded_mutations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_mutations = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn mutate(mut self, mutate: Mutate) -> Self {
        self.mutate = mutate;
        self
    }

    pub fn ignorer(mut self, ignorer: Box<dyn MutantIgnorer>) -> Self {
        self.ignorers.push(ignorer);
        self
    }

    pub fn regex_oracle<F>(mut self, oracle: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> Result<Vec<String>, PatternError> + Send + Sync + 'static,
    {
        self.regex_oracle = Some(Box::new(oracle));
        self
    }

    pub fn activation_helper(mut self, name: impl Into<String>) -> Self {
        self.activation_helper = Some(name.into());
        self
    }

    /// Validates the level and the excluded-mutations list against the
    /// operator catalog.
    pub fn build(self) -> Result<InstrumenterOptions, ConfigError> {
        if let Some(level) = &self.level {
            level.validate()?;
        }
        for entry in &self.excluded_mutations {
            if !catalog::is_family(entry) && !catalog::is_operator(entry) {
                return Err(ConfigError::UnknownExcludedMutation(entry.clone()));
            }
        }
        Ok(InstrumenterOptions {
            level: self.level,
            excluded_mutations: self.excluded_mutations,
            mutate: self.mutate,
            ignorers: self.ignorers,
            regex_oracle: self.regex_oracle,
            activation_helper: self
                .activation_helper
                .unwrap_or_else(|| DEFAULT_ACTIVATION_HELPER.to_owned()),
        })
    }
}
