use crate::{
    ast::{
        ast::Identifier,
        expressions::{BinaryExpr, BinaryOperator, CallExpr, DerefExpr, Expression, IntLiteralExpr},
    },
    errors::errors::{Diagnostic, SyntaxError},
    lexer::tokens::TokenKind,
    SourceLocation,
};

use super::{
    lookups::BindingPower,
    parser::{ParseResult, Parser},
};

pub fn parse_expr<'src>(
    parser: &mut Parser<'src>,
    bp: BindingPower,
) -> ParseResult<'src, Expression<'src>> {
    parser.nested(|parser| parse_nested_expr(parser, bp))
}

fn parse_nested_expr<'src>(
    parser: &mut Parser<'src>,
    bp: BindingPower,
) -> ParseResult<'src, Expression<'src>> {
    // Spans of infix nodes start here, so a grouped lhs keeps its `(`
    let start = parser.current_token().location;

    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected("expression")),
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than bp, keep extending lhs
    loop {
        let kind = parser.current_token_kind();
        let token_bp = *parser.get_bp_lookup().get(&kind).unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&kind) {
            Some(handler) => *handler,
            None => break,
        };
        left = led(parser, start, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Expression<'src>> {
    match parser.current_token_kind() {
        TokenKind::Int => {
            let token = parser.advance();
            match token.text.parse::<u64>() {
                Ok(value) => Ok(Expression::IntLiteral(IntLiteralExpr {
                    text: token.text,
                    value,
                    location: token.location,
                })),
                Err(_) => {
                    // The literal is well formed, only its value is not.
                    parser.report(Diagnostic::new(
                        SyntaxError::NumberParseError {
                            token: token.text.to_string(),
                        },
                        token.location,
                    ));
                    Ok(Expression::Error(token.location))
                }
            }
        }
        TokenKind::Id => {
            let token = parser.advance();
            Ok(Expression::Var(Identifier {
                name: token.text,
                location: token.location,
            }))
        }
        _ => Err(parser.unexpected("expression")),
    }
}

pub fn parse_binary_expr<'src>(
    parser: &mut Parser<'src>,
    start: SourceLocation<'src>,
    left: Expression<'src>,
    bp: BindingPower,
) -> ParseResult<'src, Expression<'src>> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::EqEq => BinaryOperator::Equals,
        _ => {
            return Err(Diagnostic::new(
                SyntaxError::UnexpectedToken {
                    expected: String::from("binary operator"),
                    found: operator_token.describe(),
                },
                operator_token.location,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Binary(BinaryExpr {
        location: parser.span_from(&start),
        lhs: Box::new(left),
        operator,
        rhs: Box::new(right),
    }))
}

pub fn parse_deref_expr<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Expression<'src>> {
    let start = parser.advance().location;
    let pointer = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Deref(DerefExpr {
        pointer: Box::new(pointer),
        location: parser.span_from(&start),
    }))
}

pub fn parse_grouping_expr<'src>(parser: &mut Parser<'src>) -> ParseResult<'src, Expression<'src>> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_call_expr<'src>(
    parser: &mut Parser<'src>,
    start: SourceLocation<'src>,
    left: Expression<'src>,
    _bp: BindingPower,
) -> ParseResult<'src, Expression<'src>> {
    parser.advance();

    let mut args = vec![];
    if !parser.at(TokenKind::RParen) {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);
            if parser.at(TokenKind::Comma) {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::RParen)?;

    Ok(Expression::Call(CallExpr {
        location: parser.span_from(&start),
        callee: Box::new(left),
        args,
    }))
}
