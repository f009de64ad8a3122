//! Error types for the tinycall system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every stage of the pipeline reports failures through the same [`Error`]
//! type, so a failure propagates unchanged out of `compile`.

use std::fmt;

use thiserror::Error;

use crate::token_kind::TokenKind;

/// Result alias used throughout tinycall.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for tinycall operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a lex error for an offending character.
    #[must_use]
    pub fn lex(
        message: impl Into<String>,
        character: char,
        offset: usize,
        line: u32,
        column: u32,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::LexError {
            message: message.into(),
            character,
            offset,
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates a parse error.
    ///
    /// `found` is the kind of the unexpected token, or `None` when input
    /// ended early.
    #[must_use]
    pub fn parse(
        message: impl Into<String>,
        found: Option<TokenKind>,
        line: u32,
        column: u32,
    ) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            found,
            line,
            column,
        })
    }

    /// Creates a traversal error.
    #[must_use]
    pub fn traversal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TraversalError(message.into()))
    }

    /// Creates a code generation error.
    #[must_use]
    pub fn codegen(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CodeGenError(message.into()))
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this is a lex error.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self.kind, ErrorKind::LexError { .. })
    }

    /// Returns true if this is a parse error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source character matched no token rule.
    #[error("lex error at {line}:{column}: {message}")]
    LexError {
        /// Description of the lex error.
        message: String,
        /// The offending character.
        character: char,
        /// Byte offset of the offending character.
        offset: usize,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// The token sequence violates the grammar.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Kind of the unexpected token (`None` at end of input).
        found: Option<TokenKind>,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A tree handed to the traversal engine is structurally invalid.
    #[error("traversal error: {0}")]
    TraversalError(String),

    /// A target tree cannot be rendered.
    #[error("code generation error: {0}")]
    CodeGenError(String),

    /// Semantic limit exceeded (nesting too deep).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),
}

/// Semantic limits that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum nesting depth exceeded.
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepth { limit } => write!(f, "max nesting depth ({limit}) exceeded"),
        }
    }
}
