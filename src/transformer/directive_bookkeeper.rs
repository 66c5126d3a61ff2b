//! Inline comment directives that suppress mutants per line or per region.
//!
//! Syntax, inside any comment:
//!
//! ```text
//! mutweave disable [next-line] all|Name[,Name...][: reason]
//! mutweave restore [next-line] all|Name[,Name...]
//! ```
//!
//! A name is a mutator family or a full operator id. Plain directives apply
//! from the following line until restored; `next-line` directives cover only
//! the line after the comment. A directive naming a mutant's family or
//! operator takes precedence over a blanket `all`, whichever came later in
//! the file wins within the same precedence.

use std::sync::OnceLock;

use regex::Regex;

use crate::source::{SourceFile, SourceMap};

pub const DEFAULT_REASON: &str = "Ignored using a comment";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Disable,
    Restore,
}

#[derive(Clone, Debug)]
enum Scope {
    All,
    Names(Vec<String>),
}

#[derive(Clone, Debug)]
struct Directive {
    /// Line the comment ends on.
    line: u32,
    next_line: bool,
    action: Action,
    scope: Scope,
    reason: Option<String>,
}

impl Directive {
    fn covers(&self, line: u32) -> bool {
        if self.next_line {
            line == self.line + 1
        } else {
            line > self.line
        }
    }

    fn matches(&self, family: &str, operator: &str) -> Option<bool> {
        match &self.scope {
            Scope::All => Some(false),
            Scope::Names(names) => names
                .iter()
                .any(|name| name == family || name == operator)
                .then_some(true),
        }
    }
}

fn directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // the unwrap only fires on a malformed literal pattern
        #[allow(clippy::unwrap_used)]
        Regex::new(
            r"(?m)^\s*mutweave\s+(?P<action>disable|restore)(?P<next>\s+next-line)?\s+(?P<scope>all|[A-Za-z_][A-Za-z0-9_]*(?:\s*,\s*[A-Za-z_][A-Za-z0-9_]*)*)(?:\s*:\s*(?P<reason>\S.*?))?\s*$",
        )
        .unwrap()
    })
}

/// Tracks every directive comment of one file and answers, per mutant, with
/// the suppression reason in force at its line.
#[derive(Debug, Default)]
pub struct DirectiveBookkeeper {
    directives: Vec<Directive>,
}

impl DirectiveBookkeeper {
    pub fn new(file: &SourceFile, map: &SourceMap) -> Self {
        let mut directives = Vec::new();
        for comment in &file.comments {
            for captures in directive_re().captures_iter(&comment.text) {
                let action = match &captures["action"] {
                    "disable" => Action::Disable,
                    _ => Action::Restore,
                };
                let scope = match &captures["scope"] {
                    "all" => Scope::All,
                    names => Scope::Names(
                        names.split(',').map(|name| name.trim().to_owned()).collect(),
                    ),
                };
                directives.push(Directive {
                    line: map.line_of(comment.span.hi),
                    next_line: captures.name("next").is_some(),
                    action,
                    scope,
                    reason: captures.name("reason").map(|m| m.as_str().to_owned()),
                });
            }
        }
        Self { directives }
    }

    /// The suppression reason for a mutant of `family`/`operator` whose
    /// location starts at `line`, if any directive disables it there.
    pub fn find_ignore_reason(&self, line: u32, family: &str, operator: &str) -> Option<String> {
        let winner = self
            .directives
            .iter()
            .filter(|d| d.covers(line))
            .filter_map(|d| d.matches(family, operator).map(|specific| (specific, d)))
            // specific beats blanket, then file order
            .max_by_key(|(specific, d)| (*specific, d.line, d.next_line))?;

        match winner.1.action {
            Action::Disable => Some(
                winner
                    .1
                    .reason
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REASON.to_owned()),
            ),
            Action::Restore => None,
        }
    }
}
