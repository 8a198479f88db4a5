//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default pattern handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The slice of source the token covers
/// * `$location` - The token's SourceLocation
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42", location);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $location:expr) => {
        Token {
            kind: $kind,
            text: $text,
            location: $location,
        }
    };
}

/// Creates a default pattern handler for fixed-spelling tokens.
///
/// Expands to a function that turns the matched text into a token of the
/// given kind. The function is generic over the source lifetime so it
/// coerces to `PatternHandler`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler<'src>(text: &'src str, location: SourceLocation<'src>) -> Option<Token<'src>> {
            Some(MK_TOKEN!($kind, text, location))
        }
        handler
    }};
}
