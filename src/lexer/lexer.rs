use std::iter::FusedIterator;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{SourceLocation, DEFAULT_FILE, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns a matched lexeme into a token, or `None` for skipped text.
pub type PatternHandler = for<'src> fn(&'src str, SourceLocation<'src>) -> Option<Token<'src>>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Anchored, tried in order; two-character operators precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Int) },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqEq) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen) },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace) },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
    ];
}

/// A lazy, single-pass token stream over a borrowed source buffer.
///
/// The stream always ends with exactly one `Endf` token, after which the
/// iterator is exhausted. A character that starts no token becomes an
/// `Error` token covering that one character; scanning then continues.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    file: &'src str,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<&'src str>) -> Lexer<'src> {
        Lexer {
            source,
            file: file.unwrap_or(DEFAULT_FILE),
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    pub fn file(&self) -> &'src str {
        self.file
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Location of the next `length` bytes.
    fn location(&self, length: usize) -> SourceLocation<'src> {
        SourceLocation::new(self.file, self.line, self.column, self.pos, length)
    }

    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        while !self.at_eof() {
            let remainder = self.remainder();
            let (handler, length) = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())))
                .unwrap_or_else(|| {
                    let length = remainder.chars().next().map_or(1, char::len_utf8);
                    (error_handler as PatternHandler, length)
                });

            let text = &remainder[..length];
            let location = self.location(length);
            self.advance_over(text);

            if let Some(token) = handler(text, location) {
                trace!("lexed {}", token);
                return Some(token);
            }
        }

        if self.finished {
            return None;
        }

        self.finished = true;
        Some(MK_TOKEN!(TokenKind::Endf, self.remainder(), self.location(0)))
    }
}

impl FusedIterator for Lexer<'_> {}

fn skip_handler<'src>(_text: &'src str, _location: SourceLocation<'src>) -> Option<Token<'src>> {
    None
}

fn symbol_handler<'src>(text: &'src str, location: SourceLocation<'src>) -> Option<Token<'src>> {
    let kind = RESERVED_LOOKUP.get(text).copied().unwrap_or(TokenKind::Id);
    Some(MK_TOKEN!(kind, text, location))
}

fn error_handler<'src>(text: &'src str, location: SourceLocation<'src>) -> Option<Token<'src>> {
    Some(MK_TOKEN!(TokenKind::Error, text, location))
}

/// Scans a whole buffer, `Endf` included.
pub fn tokenize<'src>(source: &'src str, file: Option<&'src str>) -> Vec<Token<'src>> {
    Lexer::new(source, file).collect()
}
