use crate::{
    ast::{
        ast::HasLocation,
        declarations::{Declaration, ExternFunctionDef, FunctionDef, Param, StructDef, StructField},
        types::Type,
    },
    lexer::tokens::TokenKind,
};

use super::{
    parser::{ParseResult, Parser},
    stmt::expect_identifier,
    types::parse_type,
};

pub fn parse_decl<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Declaration<'src>> {
    match parser.get_decl_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("declaration")),
    }
}

pub fn parse_def_decl<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Declaration<'src>> {
    let start = parser.advance().location;

    let name = expect_identifier(parser)?;

    parser.expect(TokenKind::LParen)?;

    let mut params = Vec::new();
    if !parser.at(TokenKind::RParen) {
        loop {
            let param_name = expect_identifier(parser)?;
            parser.expect(TokenKind::Colon)?;
            let annotation = parse_type(parser)?;
            params.push(Param {
                location: parser.span_from(param_name.location()),
                name: param_name,
                annotation,
            });

            if parser.at(TokenKind::Comma) {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::RParen)?;

    let return_type = if parser.at(TokenKind::Colon) {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    if !parser.at(TokenKind::LBrace) {
        return Err(parser.unexpected(TokenKind::LBrace.describe()));
    }
    let body = parser.parse_block();

    Ok(Declaration::Def(FunctionDef {
        location: parser.span_from(&start),
        name,
        params,
        return_type,
        body,
    }))
}

pub fn parse_extern_def_decl<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Declaration<'src>> {
    // extern def puts(*u8): int = puts;
    let start = parser.advance().location;
    parser.expect(TokenKind::Def)?;

    let name = expect_identifier(parser)?;

    parser.expect(TokenKind::LParen)?;
    let param_types = parse_type_list(parser, TokenKind::RParen)?;
    parser.expect(TokenKind::RParen)?;

    parser.expect(TokenKind::Colon)?;
    let return_type = parse_type(parser)?;

    parser.expect(TokenKind::Eq)?;
    let extern_name = expect_identifier(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Declaration::ExternDef(ExternFunctionDef {
        location: parser.span_from(&start),
        name,
        param_types,
        return_type,
        extern_name,
    }))
}

pub fn parse_struct_decl<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Declaration<'src>> {
    let start = parser.advance().location;

    let name = expect_identifier(parser)?;

    parser.expect(TokenKind::LBrace)?;

    let mut fields = Vec::new();
    while !parser.at(TokenKind::RBrace) {
        let is_mutable = match parser.current_token_kind() {
            TokenKind::Val => false,
            TokenKind::Mut => true,
            _ => return Err(parser.unexpected("`val`, `mut` or `}`")),
        };
        let field_start = parser.advance().location;

        let field_name = expect_identifier(parser)?;
        parser.expect(TokenKind::Colon)?;
        let annotation = parse_type(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        fields.push(StructField {
            location: parser.span_from(&field_start),
            name: field_name,
            is_mutable,
            annotation,
        });
    }

    parser.expect(TokenKind::RBrace)?;

    Ok(Declaration::Struct(StructDef {
        location: parser.span_from(&start),
        name,
        fields,
    }))
}

/// Parses `Type (, Type)*` up to, not including, `close`.
fn parse_type_list<'src>(
    parser: &mut Parser<'src>,
    close: TokenKind,
) -> ParseResult<'src, Vec<Type<'src>>> {
    let mut types = Vec::new();
    if parser.at(close) {
        return Ok(types);
    }

    loop {
        types.push(parse_type(parser)?);
        if parser.at(TokenKind::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    Ok(types)
}
