//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (identifiers)
//! - Pointer types, `*T` and `*mut T`
//!
//! Similar to expression parsing, types are dispatched on the current token
//! through a NUD lookup table.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Identifier,
        types::{PointerType, Type},
    },
    lexer::tokens::TokenKind,
};

use super::parser::{ParseResult, Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = for<'src> fn(&mut Parser<'src>) -> ParseResult<'src, Type<'src>>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Id, parse_symbol_type);
    parser.type_nud(TokenKind::Star, parse_pointer_type);
}

pub fn parse_type<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Type<'src>> {
    parser.nested(parse_nested_type)
}

fn parse_nested_type<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Type<'src>> {
    match parser.get_type_nud_lookup().get(&parser.current_token_kind()) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(parser.unexpected("type")),
    }
}

pub fn parse_symbol_type<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Type<'src>> {
    let token = parser.expect(TokenKind::Id)?;
    Ok(Type::Var(Identifier {
        name: token.text,
        location: token.location,
    }))
}

pub fn parse_pointer_type<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Type<'src>> {
    let start = parser.expect(TokenKind::Star)?.location;

    let is_mutable = parser.at(TokenKind::Mut);
    if is_mutable {
        parser.advance();
    }

    let to = parse_type(parser)?;

    Ok(Type::Pointer(PointerType {
        is_mutable,
        to: Box::new(to),
        location: parser.span_from(&start),
    }))
}
