use crate::{
    ast::{
        ast::Identifier,
        statements::{Block, ExpressionStatement, ReturnStatement, Statement, ValStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    parser::{ParseResult, Parser},
    types::parse_type,
};

pub fn parse_stmt<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Statement<'src>> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    if !parser.get_nud_lookup().contains_key(&kind) {
        return Err(parser.unexpected("statement"));
    }

    let start = parser.current_token().location;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Expression(ExpressionStatement {
        location: parser.span_from(&start),
        expression,
    }))
}

/// Consumes an identifier token.
pub fn expect_identifier<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Identifier<'src>> {
    let token = parser.expect(TokenKind::Id)?;
    Ok(Identifier {
        name: token.text,
        location: token.location,
    })
}

pub fn parse_val_stmt<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Statement<'src>> {
    let start = parser.advance().location;

    let name = expect_identifier(parser)?;

    let annotation = if parser.at(TokenKind::Colon) {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Eq)?;
    let initializer = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Val(ValStatement {
        location: parser.span_from(&start),
        name,
        annotation,
        initializer,
    }))
}

pub fn parse_return_stmt<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Statement<'src>> {
    let start = parser.advance().location;

    let value = if parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Return(ReturnStatement {
        value,
        location: parser.span_from(&start),
    }))
}

/// Parses `{ statement* }`. Never fails: a missing `}` is reported and the
/// statements read so far are kept.
pub fn parse_block_stmt<'src>(parser: &mut Parser<'src>) -> Block<'src> {
    let start = parser.advance().location;

    let mut statements = Vec::new();
    while !parser.at(TokenKind::RBrace) && !parser.at(TokenKind::Endf) {
        statements.push(parser.parse_statement());
    }

    if let Err(diagnostic) = parser.expect(TokenKind::RBrace) {
        parser.report(diagnostic);
    }

    Block {
        location: parser.span_from(&start),
        statements,
    }
}
