use crate::SourceLocation;

use super::ast::{ExpressionKind, HasLocation, Identifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'src> {
    /// Stands in for an expression that failed to parse.
    Error(SourceLocation<'src>),
    Var(Identifier<'src>),
    IntLiteral(IntLiteralExpr<'src>),
    Call(CallExpr<'src>),
    Binary(BinaryExpr<'src>),
    Deref(DerefExpr<'src>),
}

impl Expression<'_> {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Error(_) => ExpressionKind::Error,
            Expression::Var(_) => ExpressionKind::Var,
            Expression::IntLiteral(_) => ExpressionKind::IntLiteral,
            Expression::Call(_) => ExpressionKind::Call,
            Expression::Binary(_) => ExpressionKind::Binary,
            Expression::Deref(_) => ExpressionKind::Deref,
        }
    }
}

impl<'src> HasLocation<'src> for Expression<'src> {
    fn location(&self) -> &SourceLocation<'src> {
        match self {
            Expression::Error(location) => location,
            Expression::Var(identifier) => &identifier.location,
            Expression::IntLiteral(literal) => &literal.location,
            Expression::Call(call) => &call.location,
            Expression::Binary(binary) => &binary.location,
            Expression::Deref(deref) => &deref.location,
        }
    }
}

/// Integer literal; `text` is the literal as written.
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteralExpr<'src> {
    pub text: &'src str,
    pub value: u64,
    pub location: SourceLocation<'src>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr<'src> {
    pub callee: Box<Expression<'src>>,
    pub args: Vec<Expression<'src>>,
    pub location: SourceLocation<'src>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'src> {
    pub lhs: Box<Expression<'src>>,
    pub operator: BinaryOperator,
    pub rhs: Box<Expression<'src>>,
    pub location: SourceLocation<'src>,
}

/// Prefix `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerefExpr<'src> {
    pub pointer: Box<Expression<'src>>,
    pub location: SourceLocation<'src>,
}
