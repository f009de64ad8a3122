//! Token categories.
//!
//! Lives in the foundation layer so that parse errors can name the kind of
//! token they stopped at.

use std::fmt;

/// The category of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenKind {
    /// `(` or `)`
    Paren,
    /// A run of decimal digits like `42`
    Number,
    /// A double-quoted string like `"hi"`
    String,
    /// A run of ASCII letters like `add`
    Name,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paren => "paren",
            Self::Number => "number",
            Self::String => "string",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
