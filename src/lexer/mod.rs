//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and punctuation
//! - Line/column/offset tracking for every token
//! - Comments and whitespace handling
//! - Unrecognised characters, reported as `Error` tokens

pub mod lexer;
pub mod tokens;
