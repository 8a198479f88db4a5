#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// File identifier used when the caller does not name the source.
pub const DEFAULT_FILE: &str = "shell";

/// A region of a source buffer.
///
/// `line` and `column` are 1-based and describe the first character of the
/// region; `column` counts characters, `offset` and `length` count bytes.
/// The file identifier and the source text are both borrowed for `'src`, so
/// the buffers must outlive every token and node built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation<'src> {
    pub file: &'src str,
    pub line: u32,
    pub column: u32,
    pub offset: usize,
    pub length: usize,
}

impl<'src> SourceLocation<'src> {
    pub fn new(file: &'src str, line: u32, column: u32, offset: usize, length: usize) -> Self {
        SourceLocation {
            file,
            line,
            column,
            offset,
            length,
        }
    }

    /// Location of the start of a buffer.
    pub fn start_of(file: &'src str) -> Self {
        SourceLocation::new(file, 1, 1, 0, 0)
    }

    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }

    /// Spans from the start of `start` to the end of `end`.
    pub fn between(start: &SourceLocation<'src>, end: &SourceLocation<'src>) -> Self {
        SourceLocation {
            file: start.file,
            line: start.line,
            column: start.column,
            offset: start.offset,
            length: end.end_offset().saturating_sub(start.offset),
        }
    }

    pub fn contains(&self, other: &SourceLocation<'_>) -> bool {
        self.file == other.file
            && self.offset <= other.offset
            && other.end_offset() <= self.end_offset()
    }

    /// Returns the slice of `source` this location covers.
    pub fn text_in<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.offset..self.end_offset())
    }
}

impl Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
