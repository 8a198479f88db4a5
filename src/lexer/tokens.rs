use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::SourceLocation;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("extern", TokenKind::Extern);
        map.insert("def", TokenKind::Def);
        map.insert("struct", TokenKind::Struct);
        map.insert("val", TokenKind::Val);
        map.insert("mut", TokenKind::Mut);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Error,
    Id,
    Int,

    // Reserved
    Extern,
    Def,
    Struct,
    Val,
    Mut,
    Return,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
    Star,
    Comma,

    Eq,   // =
    EqEq, // ==

    Endf,
}

impl TokenKind {
    /// How the kind reads in a diagnostic.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Error => "unrecognised character",
            TokenKind::Id => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Extern => "`extern`",
            TokenKind::Def => "`def`",
            TokenKind::Struct => "`struct`",
            TokenKind::Val => "`val`",
            TokenKind::Mut => "`mut`",
            TokenKind::Return => "`return`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Star => "`*`",
            TokenKind::Comma => "`,`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::Endf => "end of file",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexeme: its kind, the slice of source it covers and where that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub location: SourceLocation<'src>,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.text, self.location)
    }
}

impl Token<'_> {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Describes the token for "found ..." parts of diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Id | TokenKind::Int => format!("{} `{}`", self.kind.describe(), self.text),
            TokenKind::Error => format!("`{}`", self.text),
            _ => self.kind.describe().to_string(),
        }
    }
}
