use std::collections::HashMap;

use crate::{
    ast::{declarations::Declaration, expressions::Expression, statements::Statement},
    lexer::tokens::TokenKind,
    SourceLocation,
};

use super::{
    decl::*,
    expr::*,
    parser::{ParseResult, Parser},
    stmt::*,
};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Unary,
    Call,
}

pub type StmtHandler = for<'src> fn(&mut Parser<'src>) -> ParseResult<'src, Statement<'src>>;
pub type DeclHandler = for<'src> fn(&mut Parser<'src>) -> ParseResult<'src, Declaration<'src>>;
pub type NUDHandler = for<'src> fn(&mut Parser<'src>) -> ParseResult<'src, Expression<'src>>;
/// Infix handlers also get where the whole expression started.
pub type LEDHandler = for<'src> fn(
    &mut Parser<'src>,
    SourceLocation<'src>,
    Expression<'src>,
    BindingPower,
) -> ParseResult<'src, Expression<'src>>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::EqEq, BindingPower::Relational, parse_binary_expr);

    parser.led(TokenKind::LParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Id, parse_primary_expr);
    parser.nud(TokenKind::Star, parse_deref_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Val, parse_val_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    // Declarations
    parser.decl(TokenKind::Def, parse_def_decl);
    parser.decl(TokenKind::Extern, parse_extern_def_decl);
    parser.decl(TokenKind::Struct, parse_struct_decl);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
