//! JavaScript Parser Component
//!
//! Provides a lexer, recursive descent parser, ESTree-shaped AST, JavaScript
//! code generation, and a generic visitor.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes JavaScript source code
//! - [`TokenKind`] - Token kinds: keywords, literals, punctuation, operators
//! - [`Parser`] - Recursive descent parser producing the AST
//! - [`Node`] - Abstract Syntax Tree node variants
//! - [`Visitor`] - Default-recursive pre-order traversal
//!
//! # Example
//!
//! ```
//! use parser::Parser;
//!
//! let source = "const a = 1 + 2 * 3;";
//! let mut parser = Parser::new(source);
//! let program = parser.parse().unwrap();
//!
//! assert_eq!(program.gen_js(), "const a = 1 + 2 * 3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ast;
pub mod error;
pub mod gen_js;
pub mod lexer;
pub mod parser;
pub mod visitor;

pub use ast::{
    BinaryOperator, ImportKind, Node, NodeType, SourceType, UnaryOperator,
    VariableDeclarationKind,
};
pub use lexer::{Lexer, TokenKind};
pub use parser::Parser;
pub use visitor::Visitor;
