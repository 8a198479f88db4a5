use crate::SourceLocation;

/// Implemented by every node that knows where it came from.
pub trait HasLocation<'src> {
    fn location(&self) -> &SourceLocation<'src>;
}

/// Statement Kinds
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StatementKind {
    Error,
    Expression,
    Val,
    Return,
}

/// Expression Kinds
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExpressionKind {
    Error,
    Var,
    IntLiteral,
    Call,
    Binary,
    Deref,
}

/// Type Kinds
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TypeKind {
    Error,
    Var,
    Pointer,
}

/// Declaration Kinds
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DeclarationKind {
    Error,
    Def,
    ExternDef,
    Struct,
}

/// A name as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'src> {
    pub name: &'src str,
    pub location: SourceLocation<'src>,
}

impl<'src> HasLocation<'src> for Identifier<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        &self.location
    }
}
