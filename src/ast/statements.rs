use std::slice::Iter;

use crate::SourceLocation;

use super::{
    ast::{HasLocation, Identifier, StatementKind},
    expressions::Expression,
    types::Type,
};

/// A brace-delimited or top-level sequence of statements, in textual order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'src> {
    pub location: SourceLocation<'src>,
    pub statements: Vec<Statement<'src>>,
}

impl<'src> Block<'src> {
    pub fn iter(&self) -> Iter<'_, Statement<'src>> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<'src> HasLocation<'src> for Block<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        &self.location
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'src> {
    /// Stands in for a statement that failed to parse, spanning the tokens
    /// consumed by the attempt and by recovery.
    Error(SourceLocation<'src>),
    Expression(ExpressionStatement<'src>),
    Val(ValStatement<'src>),
    Return(ReturnStatement<'src>),
}

impl Statement<'_> {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Error(_) => StatementKind::Error,
            Statement::Expression(_) => StatementKind::Expression,
            Statement::Val(_) => StatementKind::Val,
            Statement::Return(_) => StatementKind::Return,
        }
    }
}

impl<'src> HasLocation<'src> for Statement<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        match self {
            Statement::Error(location) => location,
            Statement::Expression(statement) => &statement.location,
            Statement::Val(statement) => &statement.location,
            Statement::Return(statement) => &statement.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement<'src> {
    pub expression: Expression<'src>,
    pub location: SourceLocation<'src>,
}

/// `val name (: annotation)? = initializer;`
#[derive(Debug, Clone, PartialEq)]
pub struct ValStatement<'src> {
    pub name: Identifier<'src>,
    pub annotation: Option<Type<'src>>,
    pub initializer: Expression<'src>,
    pub location: SourceLocation<'src>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement<'src> {
    pub value: Option<Expression<'src>>,
    pub location: SourceLocation<'src>,
}
