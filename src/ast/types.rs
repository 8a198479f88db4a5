//! Type annotations in the AST.
//!
//! Types here are purely syntactic: a named type such as `int` is kept as
//! the identifier that was written and is resolved by later phases.
//!
//! - `Var` - a named type
//! - `Pointer` - `*T` or `*mut T`

use crate::SourceLocation;

use super::ast::{HasLocation, Identifier, TypeKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Type<'src> {
    /// Stands in for a type annotation that failed to parse.
    Error(SourceLocation<'src>),
    Var(Identifier<'src>),
    Pointer(PointerType<'src>),
}

impl Type<'_> {
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Error(_) => TypeKind::Error,
            Type::Var(_) => TypeKind::Var,
            Type::Pointer(_) => TypeKind::Pointer,
        }
    }
}

impl<'src> HasLocation<'src> for Type<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        match self {
            Type::Error(location) => location,
            Type::Var(identifier) => &identifier.location,
            Type::Pointer(pointer) => &pointer.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerType<'src> {
    pub is_mutable: bool,
    pub to: Box<Type<'src>>,
    pub location: SourceLocation<'src>,
}
