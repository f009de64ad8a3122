//! Target abstract syntax tree.
//!
//! The target AST is shaped for C-style call syntax: calls have an
//! [`Identifier`] callee, and top-level calls are wrapped in
//! `ExpressionStatement` so they render with a trailing `;`.

use crate::ast::NodeKind;

/// A bare identifier, used as a call's callee.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A target AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum TargetNode {
    /// The root: one statement per top-level source expression.
    Program {
        /// Statements and bare top-level literals.
        body: Vec<TargetNode>,
    },
    /// Numeric literal, verbatim.
    NumberLiteral {
        /// The digits.
        value: String,
    },
    /// String literal, without quotes.
    StringLiteral {
        /// The string contents.
        value: String,
    },
    /// Standalone identifier.
    Identifier(Identifier),
    /// Call like `add(1, 2)`.
    CallExpression {
        /// The called function.
        callee: Identifier,
        /// Arguments in source order.
        arguments: Vec<TargetNode>,
    },
    /// Top-level call wrapper, rendered with a trailing `;`.
    ExpressionStatement {
        /// The wrapped expression.
        expression: Box<TargetNode>,
    },
}

impl TargetNode {
    /// Creates a program node.
    #[must_use]
    pub fn program(body: Vec<TargetNode>) -> Self {
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

    /// Creates an identifier node.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Creates a call node.
    #[must_use]
    pub fn call(callee: impl Into<String>, arguments: Vec<TargetNode>) -> Self {
        Self::CallExpression {
            callee: Identifier::new(callee),
            arguments,
        }
    }

    /// Wraps an expression as a statement.
    #[must_use]
    pub fn statement(expression: TargetNode) -> Self {
        Self::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::NumberLiteral { .. } => NodeKind::NumberLiteral,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::CallExpression { .. } => NodeKind::CallExpression,
            Self::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
        }
    }

    /// Returns true if this is a statement wrapper.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::ExpressionStatement { .. })
    }

    /// Returns the body of a program, or None if not a program.
    #[must_use]
    pub fn as_program(&self) -> Option<&[TargetNode]> {
        match self {
            Self::Program { body } => Some(body),
            _ => None,
        }
    }

    /// Returns the callee name and arguments of a call, or None if not a call.
    #[must_use]
    pub fn as_call(&self) -> Option<(&str, &[TargetNode])> {
        match self {
            Self::CallExpression { callee, arguments } => Some((&callee.name, arguments)),
            _ => None,
        }
    }

    /// Returns the wrapped expression of a statement, or None otherwise.
    #[must_use]
    pub fn as_statement(&self) -> Option<&TargetNode> {
        match self {
            Self::ExpressionStatement { expression } => Some(expression),
            _ => None,
        }
    }
}
