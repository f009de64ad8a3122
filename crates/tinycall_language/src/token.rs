//! Tokens produced by the lexer and consumed by the parser.

use crate::span::Span;

pub use tinycall_foundation::TokenKind;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The category of this token.
    pub kind: TokenKind,
    /// The token text. Strings exclude their quotes.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true if this token is `(`.
    #[must_use]
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    /// Returns true if this token is `)`.
    #[must_use]
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }

    /// Describes this token for error messages, e.g. `name 'add'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Paren => format!("'{}'", self.text),
            TokenKind::String => format!("string \"{}\"", self.text),
            kind => format!("{kind} '{}'", self.text),
        }
    }
}
