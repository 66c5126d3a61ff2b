#![deny(unused_must_use, rust_2018_idioms)]

//! Source-to-source mutation instrumentation.
//!
//! Given a parsed program, this crate collects every behavior-altering
//! mutant its operator catalog can produce and weaves all of them into one
//! rewritten tree. Each mutant's branch is guarded by a call to a runtime
//! activation helper, so a test runner switches mutants on and off without
//! recompiling:
//!
//! ```text
//! a + b   ==>   __mutantActive("0") ? a - b : a + b
//! ```
//!
//! The entry points are [`transformer::instrument`] for the full rewrite and
//! [`transformer::count_mutants`] for a dry-run count. What runs is shaped by
//! [`options::InstrumenterOptions`]: a [`levels::MutationLevel`] allow-list,
//! a global exclusion list, line ranges, pluggable subtree ignorers and
//! inline `mutweave disable` comment directives.

pub mod ast;
pub mod catalog;
pub mod error;
pub mod levels;
pub mod mutant;
pub mod mutators;
pub mod options;
pub mod placers;
pub mod source;
pub mod transformer;

/// Instrumentation entry points.
pub use transformer::{count_mutants, instrument, MutantIgnorer};

/// The collected mutant record.
pub use mutant::{Mutant, MutantId};

/// Configuration surface.
pub use options::{InstrumenterOptions, Mutate, RegexOracle};

/// Failures surfaced to the caller.
pub use error::{ConfigError, InstrumentError, PatternError};
