//! Pluggable node ignorers and the stack that scopes them to subtrees.

use crate::ast::{ParentContext, Target};

/// A caller-supplied rule that suppresses every mutant inside a subtree.
/// Returning `Some(reason)` at a node ignores that node and all descendants.
pub trait MutantIgnorer: Send + Sync {
    fn should_ignore(&self, target: Target<'_>, parent: &ParentContext) -> Option<String>;
}

/// Tracks which ignorer reason, if any, is in force at the current traversal
/// depth. The outermost matching node's reason wins; nested matches inside an
/// already-ignored subtree are not consulted.
#[derive(Debug, Default)]
pub struct IgnorerBookkeeper {
    // (depth the reason was activated at, reason)
    active: Vec<(usize, String)>,
}

impl IgnorerBookkeeper {
    pub fn enter(
        &mut self,
        depth: usize,
        target: Target<'_>,
        parent: &ParentContext,
        ignorers: &[Box<dyn MutantIgnorer>],
    ) {
        if !self.active.is_empty() {
            return;
        }
        if let Some(reason) = ignorers
            .iter()
            .find_map(|ignorer| ignorer.should_ignore(target, parent))
        {
            self.active.push((depth, reason));
        }
    }

    pub fn leave(&mut self, depth: usize) {
        if self.active.last().is_some_and(|(d, _)| *d == depth) {
            self.active.pop();
        }
    }

    pub fn active_reason(&self) -> Option<&str> {
        self.active.last().map(|(_, reason)| reason.as_str())
    }
}
