//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - `val`, `return` and expression statements
//! - Blocks, braced and top-level
//! - Expressions and type annotations
//! - Declarations
//! - Error recovery

use super::parser::{parse, parse_source_file, Parser, MAX_NESTING_DEPTH};
use crate::{
    ast::{
        ast::{DeclarationKind, ExpressionKind, HasLocation, StatementKind, TypeKind},
        declarations::Declaration,
        expressions::{BinaryOperator, Expression},
        statements::Statement,
        types::Type,
    },
    errors::errors::SyntaxError,
};

fn statement_kinds(source: &str) -> Vec<StatementKind> {
    let (block, _) = parse(source, Some("test.hds"));
    block.iter().map(|s| s.kind()).collect()
}

#[test]
fn test_parse_val_statement() {
    let source = "val x = 1;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    assert_eq!(block.len(), 1);

    let Statement::Val(val) = &block.statements[0] else {
        panic!("expected a val statement, got {:?}", block.statements[0]);
    };
    assert_eq!(val.name.name, "x");
    assert!(val.annotation.is_none());
    let Expression::IntLiteral(literal) = &val.initializer else {
        panic!("expected an integer literal");
    };
    assert_eq!(literal.text, "1");
    assert_eq!(literal.value, 1);
    assert_eq!(val.location.text_in(source), Some("val x = 1;"));
}

#[test]
fn test_parse_val_with_annotation() {
    let source = "val x : int = 1;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    let Statement::Val(val) = &block.statements[0] else {
        panic!("expected a val statement");
    };
    let annotation = val.annotation.as_ref().unwrap();
    assert_eq!(annotation.kind(), TypeKind::Var);
    assert_eq!(annotation.location().text_in(source), Some("int"));
}

#[test]
fn test_parse_val_with_pointer_annotation() {
    let source = "val p: *mut *u8 = q;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    let Statement::Val(val) = &block.statements[0] else {
        panic!("expected a val statement");
    };
    let Some(Type::Pointer(outer)) = &val.annotation else {
        panic!("expected a pointer type");
    };
    assert!(outer.is_mutable);
    assert_eq!(outer.location.text_in(source), Some("*mut *u8"));
    let Type::Pointer(inner) = outer.to.as_ref() else {
        panic!("expected a nested pointer type");
    };
    assert!(!inner.is_mutable);
    assert_eq!(inner.to.kind(), TypeKind::Var);
}

#[test]
fn test_missing_name_is_one_error_statement() {
    let source = "val = 1;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert_eq!(block.len(), 1);
    assert_eq!(block.statements[0].kind(), StatementKind::Error);
    assert_eq!(block.statements[0].location().text_in(source), Some("val = 1;"));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_location().offset, 4);
    assert_eq!(
        diagnostics[0].get_error(),
        &SyntaxError::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "`=`".to_string(),
        }
    );
}

#[test]
fn test_parse_braced_block() {
    let source = "{ val x = 1; val y = 2; }";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    assert_eq!(block.location.text_in(source), Some(source));

    let names: Vec<&str> = block
        .iter()
        .map(|s| match s {
            Statement::Val(val) => val.name.name,
            other => panic!("expected a val statement, got {:?}", other),
        })
        .collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_missing_semicolon_recovers_at_val() {
    let source = "val x = 1 val y = 2;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert_eq!(block.len(), 2);
    assert_eq!(block.statements[0].kind(), StatementKind::Error);
    assert_eq!(block.statements[0].location().text_in(source), Some("val x = 1"));
    let Statement::Val(val) = &block.statements[1] else {
        panic!("expected recovery to parse `val y`");
    };
    assert_eq!(val.name.name, "y");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_location().offset, 10);
    assert_eq!(diagnostics[0].get_message(), "expected `;`, found `val`");
}

#[test]
fn test_parse_empty_input() {
    let (block, diagnostics) = parse("", Some("test.hds"));

    assert!(block.is_empty());
    assert!(diagnostics.is_empty());
    assert_eq!(block.location.offset, 0);
    assert_eq!(block.location.length, 0);
}

#[test]
fn test_parse_expression_statements() {
    assert_eq!(
        statement_kinds("f(1, x); x; (y); *p;"),
        vec![
            StatementKind::Expression,
            StatementKind::Expression,
            StatementKind::Expression,
            StatementKind::Expression,
        ]
    );
}

#[test]
fn test_expression_statement_spans_semicolon() {
    let source = "  f(1, x) ;";
    let (block, _) = parse(source, Some("test.hds"));

    let Statement::Expression(statement) = &block.statements[0] else {
        panic!("expected an expression statement");
    };
    assert_eq!(statement.location.text_in(source), Some("f(1, x) ;"));
    assert_eq!(statement.expression.location().text_in(source), Some("f(1, x)"));
}

#[test]
fn test_parse_call_expression() {
    let (block, diagnostics) = parse("print(a, 2, g());", Some("test.hds"));

    assert!(diagnostics.is_empty());
    let Statement::Expression(statement) = &block.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Call(call) = &statement.expression else {
        panic!("expected a call");
    };
    assert_eq!(call.callee.kind(), ExpressionKind::Var);
    let arg_kinds: Vec<ExpressionKind> = call.args.iter().map(|a| a.kind()).collect();
    assert_eq!(
        arg_kinds,
        vec![ExpressionKind::Var, ExpressionKind::IntLiteral, ExpressionKind::Call]
    );
}

#[test]
fn test_equality_is_left_associative() {
    let source = "a == b == c;";
    let (block, diagnostics) = parse(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    let Statement::Expression(statement) = &block.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Binary(outer) = &statement.expression else {
        panic!("expected a binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Equals);
    assert_eq!(outer.lhs.kind(), ExpressionKind::Binary);
    assert_eq!(outer.rhs.kind(), ExpressionKind::Var);
    assert_eq!(outer.location.text_in(source), Some("a == b == c"));
    assert_eq!(outer.lhs.location().text_in(source), Some("a == b"));
}

#[test]
fn test_deref_binds_tighter_than_equality() {
    let source = "*f(p) == 1;";
    let (block, _) = parse(source, Some("test.hds"));

    let Statement::Expression(statement) = &block.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Binary(binary) = &statement.expression else {
        panic!("expected a binary expression");
    };
    let Expression::Deref(deref) = binary.lhs.as_ref() else {
        panic!("expected a dereference");
    };
    assert_eq!(deref.pointer.kind(), ExpressionKind::Call);
    assert_eq!(deref.location.text_in(source), Some("*f(p)"));
}

#[test]
fn test_parse_return_statements() {
    let (block, diagnostics) = parse("return; return x == 1;", Some("test.hds"));

    assert!(diagnostics.is_empty());
    let values: Vec<bool> = block
        .iter()
        .map(|s| match s {
            Statement::Return(ret) => ret.value.is_some(),
            other => panic!("expected a return statement, got {:?}", other),
        })
        .collect();
    assert_eq!(values, vec![false, true]);
}

#[test]
fn test_unclosed_block_is_reported() {
    let (block, diagnostics) = parse("{ val x = 1;", Some("test.hds"));

    assert_eq!(block.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_message(), "expected `}`, found end of file");
}

#[test]
fn test_missing_semicolon_before_brace() {
    let (block, diagnostics) = parse("{ val x = 1 }", Some("test.hds"));

    assert_eq!(block.len(), 1);
    assert_eq!(block.statements[0].kind(), StatementKind::Error);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_stray_closing_brace_makes_progress() {
    let (block, diagnostics) = parse("} val x = 1;", Some("test.hds"));

    assert_eq!(block.len(), 2);
    assert_eq!(block.statements[0].kind(), StatementKind::Error);
    assert_eq!(block.statements[1].kind(), StatementKind::Val);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_message(), "expected statement, found `}`");
}

#[test]
fn test_unrecognised_character() {
    let (block, diagnostics) = parse("val x = @; val y = 2;", Some("test.hds"));

    assert_eq!(block.len(), 2);
    assert_eq!(block.statements[0].kind(), StatementKind::Error);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_error_name(), "UnrecognisedToken");
    assert_eq!(diagnostics[0].get_location().offset, 8);
}

#[test]
fn test_integer_out_of_range() {
    let (block, diagnostics) = parse("val x = 99999999999999999999;", Some("test.hds"));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_error_name(), "NumberParseError");
    let Statement::Val(val) = &block.statements[0] else {
        panic!("the statement itself is well formed");
    };
    assert_eq!(val.initializer.kind(), ExpressionKind::Error);
}

#[test]
fn test_one_diagnostic_per_malformed_statement() {
    let (block, diagnostics) = parse("val = 1; val y = 2; val 3 4 5; x y z;", Some("test.hds"));

    assert_eq!(
        block.iter().map(|s| s.kind()).collect::<Vec<_>>(),
        vec![
            StatementKind::Error,
            StatementKind::Val,
            StatementKind::Error,
            StatementKind::Error,
        ]
    );
    assert_eq!(diagnostics.len(), 3);
}

#[test]
fn test_trailing_input_after_braced_block() {
    let (block, diagnostics) = parse("{ } val x = 1;", Some("test.hds"));

    assert!(block.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_message(), "expected end of file, found `val`");
}

#[test]
fn test_parse_expression_entry_point() {
    let mut parser = Parser::new("f(1) == 2", Some("test.hds"));
    let expression = parser.parse_expression();

    assert_eq!(expression.kind(), ExpressionKind::Binary);
    assert!(parser.finish().is_empty());
}

#[test]
fn test_parse_expression_error_node() {
    let mut parser = Parser::new("f(1;", Some("test.hds"));
    let expression = parser.parse_expression();

    assert_eq!(expression.kind(), ExpressionKind::Error);
    assert_eq!(expression.location().length, 3);
    assert_eq!(parser.diagnostics().len(), 1);
}

#[test]
fn test_parse_type_entry_point() {
    let mut parser = Parser::new("*Point", Some("test.hds"));
    assert_eq!(parser.parse_type().kind(), TypeKind::Pointer);

    let mut parser = Parser::new("=", Some("test.hds"));
    assert_eq!(parser.parse_type().kind(), TypeKind::Error);
    assert_eq!(parser.diagnostics()[0].get_message(), "expected type, found `=`");
}

#[test]
fn test_parse_declarations() {
    let source = "extern def puts(*u8, int): int = c_puts;\n\
                  struct Point { val x: int; mut y: int; }\n\
                  def main(): int { return 0; }\n\
                  def noop() {}";
    let (file, diagnostics) = parse_source_file(source, Some("test.hds"));

    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(file.declarations.len(), 4);

    let Declaration::ExternDef(puts) = &file.declarations[0] else {
        panic!("expected an extern def");
    };
    assert_eq!(puts.name.name, "puts");
    assert_eq!(puts.param_types.len(), 2);
    assert_eq!(puts.extern_name.name, "c_puts");
    assert_eq!(puts.location.text_in(source), Some("extern def puts(*u8, int): int = c_puts;"));

    let Declaration::Struct(point) = &file.declarations[1] else {
        panic!("expected a struct");
    };
    assert_eq!(point.name.name, "Point");
    let fields: Vec<(&str, bool)> = point.fields.iter().map(|f| (f.name.name, f.is_mutable)).collect();
    assert_eq!(fields, vec![("x", false), ("y", true)]);

    let Declaration::Def(main) = &file.declarations[2] else {
        panic!("expected a def");
    };
    assert_eq!(main.name.name, "main");
    assert!(main.params.is_empty());
    assert!(main.return_type.is_some());
    assert_eq!(main.body.len(), 1);

    let Declaration::Def(noop) = &file.declarations[3] else {
        panic!("expected a def");
    };
    assert!(noop.return_type.is_none());
    assert!(noop.body.is_empty());
}

#[test]
fn test_parse_def_params() {
    let source = "def add(a: int, b: *int): int { return a; }";
    let (file, diagnostics) = parse_source_file(source, Some("test.hds"));

    assert!(diagnostics.is_empty());
    let Declaration::Def(add) = &file.declarations[0] else {
        panic!("expected a def");
    };
    let params: Vec<&str> = add.params.iter().map(|p| p.name.name).collect();
    assert_eq!(params, vec!["a", "b"]);
    assert_eq!(add.params[1].location.text_in(source), Some("b: *int"));
    assert_eq!(add.params[1].annotation.kind(), TypeKind::Pointer);
}

#[test]
fn test_malformed_declaration_recovers_at_next_keyword() {
    let source = "struct P { val x int; val y: int; } def f() {}";
    let (file, diagnostics) = parse_source_file(source, Some("test.hds"));

    let kinds: Vec<DeclarationKind> = file.declarations.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DeclarationKind::Error, DeclarationKind::Def]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_message(), "expected `:`, found identifier `int`");
}

#[test]
fn test_statement_errors_inside_def_body() {
    let (file, diagnostics) = parse_source_file("def f() { val = 1; return 2; }", Some("test.hds"));

    let Declaration::Def(def) = &file.declarations[0] else {
        panic!("a bad statement must not break the enclosing def");
    };
    assert_eq!(
        def.body.iter().map(|s| s.kind()).collect::<Vec<_>>(),
        vec![StatementKind::Error, StatementKind::Return]
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_statement_at_top_level_of_source_file() {
    let (file, diagnostics) = parse_source_file("val x = 1; def f() {}", Some("test.hds"));

    let kinds: Vec<DeclarationKind> = file.declarations.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DeclarationKind::Error, DeclarationKind::Def]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_message(), "expected declaration, found `val`");
}

#[test]
fn test_grouped_operand_spans_include_parens() {
    let cases = [
        ("(a) == b;", "(a) == b"),
        ("(f)(x);", "(f)(x)"),
        ("((g))() == (h);", "((g))() == (h)"),
    ];

    for (source, expected) in cases {
        let (block, diagnostics) = parse(source, Some("test.hds"));

        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let Statement::Expression(statement) = &block.statements[0] else {
            panic!("expected an expression statement for {:?}", source);
        };
        assert_eq!(statement.expression.location().text_in(source), Some(expected));
    }
}

#[test]
fn test_nesting_within_limit() {
    let depth = MAX_NESTING_DEPTH - 10;
    let source = format!(
        "val x: {}int = {}1{};",
        "*".repeat(depth),
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let (block, diagnostics) = parse(&source, Some("test.hds"));

    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(block.statements[0].kind(), StatementKind::Val);
}

#[test]
fn test_deep_nesting_is_reported_once() {
    let n = 100_000;
    let sources = [
        format!("val x = {}1{};", "(".repeat(n), ")".repeat(n)),
        format!("val x = {}", "(".repeat(n)),
        format!("val x: {}int = 1;", "*".repeat(n)),
        format!("return {}x;", "*".repeat(n)),
        format!("f{};", "(".repeat(n)),
    ];

    for source in &sources {
        let (block, diagnostics) = parse(source, Some("test.hds"));

        assert_eq!(block.len(), 1);
        assert_eq!(block.statements[0].kind(), StatementKind::Error);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics[0].get_error(),
            SyntaxError::NestingTooDeep { limit } if *limit == MAX_NESTING_DEPTH
        ));
    }

    let (_, diagnostics) = parse(&sources[0], Some("test.hds"));
    assert_eq!(diagnostics[0].get_location().offset, "val x = ".len() + MAX_NESTING_DEPTH);
}

#[test]
fn test_parser_recovers_after_deep_nesting() {
    let source = format!("val x = {}1; val y = 2;", "(".repeat(10_000));
    let (block, diagnostics) = parse(&source, Some("test.hds"));

    assert_eq!(
        block.iter().map(|s| s.kind()).collect::<Vec<_>>(),
        vec![StatementKind::Error, StatementKind::Val]
    );
    assert_eq!(diagnostics.len(), 1);
}
