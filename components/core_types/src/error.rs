//! JavaScript error types and error handling.
//!
//! This module provides the error types raised by the front end, along with
//! the source position where the error occurred.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SourcePosition;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors; a front end
/// only ever raises the two listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Syntax error in JavaScript source code
    #[error("SyntaxError")]
    SyntaxError,
    /// Internal front-end error that should not occur in normal operation
    #[error("InternalError")]
    InternalError,
}

/// A JavaScript error with message and source position.
///
/// This struct represents an error detected while lexing or parsing. It
/// includes the error type, a human-readable message, and the source position
/// where the offending text starts.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsError};
///
/// let error = JsError {
///     kind: ErrorKind::SyntaxError,
///     message: "Unterminated string literal".to_string(),
///     source_position: None,
/// };
///
/// assert_eq!(error.message, "Unterminated string literal");
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub source_position: Option<SourcePosition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_variants() {
        let _syntax = ErrorKind::SyntaxError;
        let _internal = ErrorKind::InternalError;
    }

    #[test]
    fn test_js_error_creation() {
        let error = JsError {
            kind: ErrorKind::SyntaxError,
            message: "test".to_string(),
            source_position: None,
        };
        assert!(matches!(error.kind, ErrorKind::SyntaxError));
    }

    #[test]
    fn test_js_error_display() {
        let error = JsError {
            kind: ErrorKind::SyntaxError,
            message: "Unexpected token".to_string(),
            source_position: None,
        };
        assert_eq!(error.to_string(), "SyntaxError: Unexpected token");
    }
}
