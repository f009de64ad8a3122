//! Core error types and token kinds for tinycall.
//!
//! This crate provides:
//! - [`Error`] - Rich error type for every compilation stage
//! - [`ErrorKind`] - Categorized failures (lex, parse, traversal, codegen)
//! - [`SemanticLimit`] - Optional resource limits that can be exceeded
//! - [`TokenKind`] - The token categories produced by the lexer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod token_kind;

pub use error::{Error, ErrorKind, Result, SemanticLimit};
pub use token_kind::TokenKind;
