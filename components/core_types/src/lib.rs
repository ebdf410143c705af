//! Core types for the JavaScript front end.
//!
//! This crate provides the foundational types shared by the lexer and parser:
//! error values and source location tracking.
//!
//! # Overview
//!
//! - [`JsError`] - JavaScript errors raised while parsing
//! - [`ErrorKind`] - Types of JavaScript errors
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, JsError, SourcePosition};
//!
//! let error = JsError {
//!     kind: ErrorKind::SyntaxError,
//!     message: "Unexpected token".to_string(),
//!     source_position: Some(SourcePosition {
//!         line: 1,
//!         column: 7,
//!         offset: 6,
//!     }),
//! };
//!
//! assert_eq!(error.to_string(), "SyntaxError: Unexpected token");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, JsError};
pub use source::SourcePosition;
