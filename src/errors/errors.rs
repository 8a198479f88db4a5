use std::fmt::Display;

use thiserror::Error;

use crate::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lexical or syntax problem, located in the source.
///
/// Diagnostics are plain data: the parser collects them and the caller
/// decides how to present them and whether to continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'src> {
    severity: Severity,
    error: SyntaxError,
    location: SourceLocation<'src>,
}

impl<'src> Diagnostic<'src> {
    pub fn new(error: SyntaxError, location: SourceLocation<'src>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            error,
            location,
        }
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn get_error(&self) -> &SyntaxError {
        &self.error
    }

    pub fn get_location(&self) -> &SourceLocation<'src> {
        &self.location
    }

    pub fn get_message(&self) -> String {
        self.error.to_string()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.error {
            SyntaxError::UnrecognisedToken { .. } => "UnrecognisedToken",
            SyntaxError::UnexpectedToken { .. } => "UnexpectedToken",
            SyntaxError::NumberParseError { .. } => "NumberParseError",
            SyntaxError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.error {
            SyntaxError::UnrecognisedToken { .. } => ErrorTip::None,
            SyntaxError::UnexpectedToken { expected, .. } if expected == "`;`" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            SyntaxError::UnexpectedToken { .. } => ErrorTip::None,
            SyntaxError::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            SyntaxError::NestingTooDeep { .. } => {
                ErrorTip::Suggestion(String::from("try splitting it with `val` bindings"))
            }
        }
    }
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.error)?;
        if let ErrorTip::Suggestion(tip) = self.get_tip() {
            write!(f, " ({})", tip)?;
        }
        Ok(())
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unrecognised character `{token}`")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("integer literal `{token}` does not fit in 64 bits")]
    NumberParseError { token: String },
    #[error("expression or type nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
