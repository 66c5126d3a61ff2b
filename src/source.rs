//! Source-text boundary types: the raw file handed over by the external
//! parser, plus the offset map used to turn byte spans into line/column
//! locations.

use crate::ast::Span;
use serde::{Deserialize, Serialize};

/// A line/column position. Lines are 1-based, columns 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open region of the original source, in line/column terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True if `other` lies entirely within this location.
    pub fn contains(&self, other: Location) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True if this location and `other` share at least one position.
    pub fn overlaps(&self, other: Location) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A source comment, delimiters already stripped by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub span: Span,
    pub text: String,
}

/// A parsed file as delivered by the external parser: name, raw text and the
/// comment stream (the AST itself travels separately).
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
    pub comments: Vec<Comment>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

/// Precomputed byte-offset to line/column map for one file.
#[derive(Clone, Debug)]
pub struct SourceMap {
    line_starts: Vec<u32>,
}

impl SourceMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// The position of a byte offset. Offsets past the end clamp to the last
    /// line.
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        Position {
            line: line_idx as u32 + 1,
            column: offset - self.line_starts[line_idx],
        }
    }

    pub fn line_of(&self, offset: u32) -> u32 {
        self.position(offset).line
    }

    pub fn location(&self, span: Span) -> Location {
        Location {
            start: self.position(span.lo),
            end: self.position(span.hi),
        }
    }
}
