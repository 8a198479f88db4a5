//! Diagnostics produced by the front end.
//!
//! This module defines the error data the parser reports. It includes:
//!
//! - Diagnostic structures with severity and source location
//! - Specific error variants for lexical and syntax problems
//! - Error formatting and display functionality
//! - Helpful suggestions attached to common mistakes

pub mod errors;
