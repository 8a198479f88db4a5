//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its public entry points.
//! The parser pulls tokens lazily from a `Lexer`, keeping exactly one token
//! of lookahead. Statements and declarations are parsed by recursive
//! descent; expressions use a Pratt parser with NUD/LED handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Declaration handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers
//!
//! Syntax errors never abort a parse. Each malformed statement or
//! declaration yields one diagnostic and an `Error` node, after which the
//! parser skips to a synchronization point:
//!
//! - statements: past the next `;`, or up to `}`, end of file, or a `val` /
//!   `return` keyword once at least one token was consumed
//! - declarations: up to the next `def`, `extern` or `struct` keyword, or
//!   end of file
//!
//! Recovery always consumes at least one token unless it is already at end
//! of file, so every parse terminates.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{
        declarations::{Declaration, SourceFile},
        expressions::Expression,
        statements::{Block, Statement},
        types::Type,
    },
    errors::errors::{Diagnostic, SyntaxError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    SourceLocation, MK_TOKEN,
};

use super::{
    decl::parse_decl,
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, DeclHandler, DeclLookup, LEDHandler,
        LEDLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::{parse_block_stmt, parse_stmt},
    types::{create_token_type_lookups, parse_type, TypeNUDHandler, TypeNUDLookup},
};

pub type ParseResult<'src, T> = Result<T, Diagnostic<'src>>;

/// Keywords that end statement-level recovery.
const STATEMENT_SYNC: [TokenKind; 2] = [TokenKind::Val, TokenKind::Return];

/// Keywords that end declaration-level recovery.
const DECLARATION_SYNC: [TokenKind; 3] = [TokenKind::Def, TokenKind::Extern, TokenKind::Struct];

/// How deep expressions and types may nest before the parser gives up on
/// the enclosing statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and maintains lookup tables for parsing
/// statements, declarations, expressions, and types. It tracks the current
/// lookahead token, the last consumed token and the diagnostics collected
/// so far.
pub struct Parser<'src> {
    /// The token source
    lexer: Lexer<'src>,
    /// The single token of lookahead
    current: Token<'src>,
    /// Location of the most recently consumed token
    last_location: SourceLocation<'src>,
    /// Number of tokens consumed so far
    consumed: usize,
    /// Expressions and types currently being parsed, innermost included
    depth: usize,
    /// Diagnostics in the order they were reported
    diagnostics: Vec<Diagnostic<'src>>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for declaration parsing handlers
    decl_lookup: DeclLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser over `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text; it must outlive the returned tree
    /// * `file` - File identifier for locations, `"shell"` when `None`
    pub fn new(source: &'src str, file: Option<&'src str>) -> Self {
        let mut lexer = Lexer::new(source, file);
        let start = SourceLocation::start_of(lexer.file());
        let current = lexer
            .next()
            .unwrap_or(MK_TOKEN!(TokenKind::Endf, "", start));

        let mut parser = Parser {
            lexer,
            current,
            last_location: start,
            consumed: 0,
            depth: 0,
            diagnostics: Vec::new(),
            stmt_lookup: HashMap::new(),
            decl_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Parses `{ statement* }` when the lookahead is `{`, otherwise a bare
    /// statement sequence up to end of file.
    pub fn parse_block(&mut self) -> Block<'src> {
        if self.at(TokenKind::LBrace) {
            return parse_block_stmt(self);
        }

        let start = self.current.location;
        let mut statements = Vec::new();
        while !self.at(TokenKind::Endf) {
            statements.push(self.parse_statement());
        }

        Block {
            location: SourceLocation::between(&start, &self.current.location),
            statements,
        }
    }

    /// Parses one statement, recovering to a synchronization point on error.
    pub fn parse_statement(&mut self) -> Statement<'src> {
        let start = self.current.location;
        let start_consumed = self.consumed;

        match parse_stmt(self) {
            Ok(statement) => statement,
            Err(diagnostic) => {
                self.report(diagnostic);
                self.synchronize(start_consumed, &STATEMENT_SYNC, true);
                Statement::Error(self.location_since(&start, start_consumed))
            }
        }
    }

    /// Parses one expression. On error the diagnostic is recorded and an
    /// `Error` expression spanning the consumed tokens is returned; no
    /// tokens are skipped.
    pub fn parse_expression(&mut self) -> Expression<'src> {
        let start = self.current.location;
        let start_consumed = self.consumed;

        match parse_expr(self, BindingPower::Default) {
            Ok(expression) => expression,
            Err(diagnostic) => {
                self.report(diagnostic);
                Expression::Error(self.location_since(&start, start_consumed))
            }
        }
    }

    /// Parses one type annotation, with the same error behaviour as
    /// `parse_expression`.
    pub fn parse_type(&mut self) -> Type<'src> {
        let start = self.current.location;
        let start_consumed = self.consumed;

        match parse_type(self) {
            Ok(ty) => ty,
            Err(diagnostic) => {
                self.report(diagnostic);
                Type::Error(self.location_since(&start, start_consumed))
            }
        }
    }

    /// Parses one top-level declaration, recovering to the next
    /// declaration keyword on error.
    pub fn parse_declaration(&mut self) -> Declaration<'src> {
        let start = self.current.location;
        let start_consumed = self.consumed;

        match parse_decl(self) {
            Ok(declaration) => declaration,
            Err(diagnostic) => {
                self.report(diagnostic);
                self.synchronize(start_consumed, &DECLARATION_SYNC, false);
                Declaration::Error(self.location_since(&start, start_consumed))
            }
        }
    }

    /// Parses declarations up to end of file.
    pub fn parse_source_file(&mut self) -> SourceFile<'src> {
        let start = self.current.location;
        let mut declarations = Vec::new();
        while !self.at(TokenKind::Endf) {
            declarations.push(self.parse_declaration());
        }

        SourceFile {
            location: SourceLocation::between(&start, &self.current.location),
            declarations,
        }
    }

    /// Consumes the parser, handing over the diagnostics.
    pub fn finish(self) -> Vec<Diagnostic<'src>> {
        self.diagnostics
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'src>] {
        &self.diagnostics
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<'src> {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Advances to the next token and returns the one consumed.
    ///
    /// At end of file nothing is consumed and `Endf` is returned again.
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.current;
        if token.kind != TokenKind::Endf {
            self.last_location = token.location;
            self.consumed += 1;
            if let Some(next) = self.lexer.next() {
                self.current = next;
            }
        }
        token
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> ParseResult<'src, Token<'src>> {
        if self.at(expected_kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected_kind.describe()))
        }
    }

    /// Builds the diagnostic for the current token when `expected` was
    /// wanted instead.
    pub fn unexpected(&self, expected: &str) -> Diagnostic<'src> {
        let token = &self.current;
        let error = if token.kind == TokenKind::Error {
            SyntaxError::UnrecognisedToken {
                token: token.text.to_string(),
            }
        } else {
            SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
            }
        };
        Diagnostic::new(error, token.location)
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn report(&mut self, diagnostic: Diagnostic<'src>) {
        debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Past `MAX_NESTING_DEPTH` nothing is parsed and a `NestingTooDeep`
    /// diagnostic at the current token is returned instead.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser<'src>) -> ParseResult<'src, T>,
    ) -> ParseResult<'src, T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Diagnostic::new(
                SyntaxError::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.location,
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Span from `start` to the last consumed token, or `start` itself when
    /// nothing has been consumed since `start_consumed`.
    pub fn location_since(
        &self,
        start: &SourceLocation<'src>,
        start_consumed: usize,
    ) -> SourceLocation<'src> {
        if self.consumed > start_consumed {
            SourceLocation::between(start, &self.last_location)
        } else {
            *start
        }
    }

    /// Span from `start` to the last consumed token.
    pub fn span_from(&self, start: &SourceLocation<'src>) -> SourceLocation<'src> {
        SourceLocation::between(start, &self.last_location)
    }

    /// Skips tokens until a synchronization point.
    ///
    /// Stops at end of file and before any of `keywords` once something has
    /// been consumed since `start_consumed`. With `statement_level`, a `;` is
    /// consumed and ends recovery and a `}` ends it unconsumed.
    fn synchronize(&mut self, start_consumed: usize, keywords: &[TokenKind], statement_level: bool) {
        let skipped_from = self.consumed;
        loop {
            let kind = self.current_token_kind();
            if kind == TokenKind::Endf {
                break;
            }
            if statement_level && kind == TokenKind::RBrace {
                break;
            }
            if statement_level && kind == TokenKind::Semicolon {
                self.advance();
                break;
            }
            if self.current.is_one_of(keywords) && self.consumed > start_consumed {
                break;
            }
            self.advance();
        }

        if self.consumed == start_consumed && !self.at(TokenKind::Endf) {
            self.advance();
        }

        debug!(
            "recovered after skipping {} tokens, resuming at {}",
            self.consumed - skipped_from,
            self.current
        );
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

/// Parses `source` as a block: braced when it starts with `{`, otherwise a
/// top-level statement sequence.
///
/// Anything left after a braced block is reported, never dropped silently.
///
/// # Returns
///
/// A tuple containing:
/// - The root Block, possibly holding `Error` statements
/// - The diagnostics, empty when the input was well formed
pub fn parse<'src>(
    source: &'src str,
    file: Option<&'src str>,
) -> (Block<'src>, Vec<Diagnostic<'src>>) {
    let mut parser = Parser::new(source, file);
    let block = parser.parse_block();

    if !parser.at(TokenKind::Endf) {
        let diagnostic = parser.unexpected(TokenKind::Endf.describe());
        parser.report(diagnostic);
        while !parser.at(TokenKind::Endf) {
            parser.advance();
        }
    }

    debug!(
        "parsed {} statements with {} diagnostics",
        block.len(),
        parser.diagnostics().len()
    );
    (block, parser.finish())
}

/// Parses `source` as a sequence of top-level declarations.
pub fn parse_source_file<'src>(
    source: &'src str,
    file: Option<&'src str>,
) -> (SourceFile<'src>, Vec<Diagnostic<'src>>) {
    let mut parser = Parser::new(source, file);
    let source_file = parser.parse_source_file();

    debug!(
        "parsed {} declarations with {} diagnostics",
        source_file.declarations.len(),
        parser.diagnostics().len()
    );
    (source_file, parser.finish())
}
