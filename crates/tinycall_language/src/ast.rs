//! Source abstract syntax tree.
//!
//! The source AST mirrors the prefix call language: literals, calls with a
//! bare name and ordered params, and a `Program` root holding the top-level
//! expressions.

use std::fmt;

/// The kind of a node, across both the source and target trees.
///
/// This is the closed set of tags the traversal engine dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Tree root holding the top-level body.
    Program,
    /// Numeric literal.
    NumberLiteral,
    /// String literal.
    StringLiteral,
    /// Bare identifier (target tree only).
    Identifier,
    /// Function call.
    CallExpression,
    /// Top-level statement wrapper (target tree only).
    ExpressionStatement,
}

impl NodeKind {
    /// Number of node kinds.
    pub const COUNT: usize = 6;

    /// Every node kind, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Program,
        Self::NumberLiteral,
        Self::StringLiteral,
        Self::Identifier,
        Self::CallExpression,
        Self::ExpressionStatement,
    ];

    /// Dense index of this kind, for kind-indexed tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tag name of this kind, e.g. `"CallExpression"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::Identifier => "Identifier",
            Self::CallExpression => "CallExpression",
            Self::ExpressionStatement => "ExpressionStatement",
        }
    }

    /// Returns true for kinds that never have children.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::NumberLiteral | Self::StringLiteral | Self::Identifier
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node {
    /// The root: top-level expressions in source order.
    Program {
        /// Top-level expressions.
        body: Vec<Node>,
    },
    /// Digit run like `42`, kept verbatim.
    NumberLiteral {
        /// The digits.
        value: String,
    },
    /// String literal like `"hi"`, without quotes.
    StringLiteral {
        /// The string contents.
        value: String,
    },
    /// Call like `(add 1 2)`.
    CallExpression {
        /// The called function's name.
        name: String,
        /// Arguments in source order.
        params: Vec<Node>,
    },
}

impl Node {
    /// Creates a program node.
    #[must_use]
    pub fn program(body: Vec<Node>) -> Self {
        Self::Program { body }
    }

    /// Creates a number literal node.
    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumberLiteral {
            value: value.into(),
        }
    }

    /// Creates a string literal node.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Creates a call node.
    #[must_use]
    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Self::CallExpression {
            name: name.into(),
            params,
        }
    }

    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::NumberLiteral { .. } => NodeKind::NumberLiteral,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
            Self::CallExpression { .. } => NodeKind::CallExpression,
        }
    }

    /// Returns true if this is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::CallExpression { .. })
    }

    /// Returns the name and params of a call, or None if not a call.
    #[must_use]
    pub fn as_call(&self) -> Option<(&str, &[Node])> {
        match self {
            Self::CallExpression { name, params } => Some((name, params)),
            _ => None,
        }
    }

    /// Returns the body of a program, or None if not a program.
    #[must_use]
    pub fn as_program(&self) -> Option<&[Node]> {
        match self {
            Self::Program { body } => Some(body),
            _ => None,
        }
    }

    /// Returns the literal value of a number or string, or None otherwise.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Self::NumberLiteral { value } | Self::StringLiteral { value } => Some(value),
            _ => None,
        }
    }
}
