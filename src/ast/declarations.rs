//! Top-level declarations and the source file that holds them.

use crate::SourceLocation;

use super::{
    ast::{DeclarationKind, HasLocation, Identifier},
    statements::Block,
    types::Type,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile<'src> {
    pub location: SourceLocation<'src>,
    pub declarations: Vec<Declaration<'src>>,
}

impl<'src> HasLocation<'src> for SourceFile<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        &self.location
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration<'src> {
    Error(SourceLocation<'src>),
    Def(FunctionDef<'src>),
    ExternDef(ExternFunctionDef<'src>),
    Struct(StructDef<'src>),
}

impl Declaration<'_> {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Error(_) => DeclarationKind::Error,
            Declaration::Def(_) => DeclarationKind::Def,
            Declaration::ExternDef(_) => DeclarationKind::ExternDef,
            Declaration::Struct(_) => DeclarationKind::Struct,
        }
    }
}

impl<'src> HasLocation<'src> for Declaration<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        match self {
            Declaration::Error(location) => location,
            Declaration::Def(def) => &def.location,
            Declaration::ExternDef(def) => &def.location,
            Declaration::Struct(def) => &def.location,
        }
    }
}

/// `def name(params): return_type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef<'src> {
    pub name: Identifier<'src>,
    pub params: Vec<Param<'src>>,
    pub return_type: Option<Type<'src>>,
    pub body: Block<'src>,
    pub location: SourceLocation<'src>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param<'src> {
    pub name: Identifier<'src>,
    pub annotation: Type<'src>,
    pub location: SourceLocation<'src>,
}

/// `extern def name(param_types): return_type = extern_name;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExternFunctionDef<'src> {
    pub name: Identifier<'src>,
    pub param_types: Vec<Type<'src>>,
    pub return_type: Type<'src>,
    pub extern_name: Identifier<'src>,
    pub location: SourceLocation<'src>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDef<'src> {
    pub name: Identifier<'src>,
    pub fields: Vec<StructField<'src>>,
    pub location: SourceLocation<'src>,
}

/// `val name: T;` or `mut name: T;` inside a struct body.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField<'src> {
    pub name: Identifier<'src>,
    pub is_mutable: bool,
    pub annotation: Type<'src>,
    pub location: SourceLocation<'src>,
}
