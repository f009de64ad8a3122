//! Lexer, parser, traversal engine, transformer, and code generator for
//! tinycall.
//!
//! # Architecture
//!
//! ```text
//! "(add 2 (subtract 4 2))"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LEXER         │  → [Paren "(", Name "add", Number "2", Paren "(", ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PARSER        │  → Program { CallExpression add [2, CallExpression subtract [4, 2]] }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TRANSFORMER     │  → Program { ExpressionStatement { CallExpression add(...) } }
//! │ (traversal)     │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CODE GENERATOR  │  → "add(2, subtract(4, 2));"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexer`] - Source text to tokens
//! - [`parser`] - Tokens to source AST
//! - [`ast`] - Source AST and the shared [`NodeKind`] tags
//! - [`target`] - Target AST
//! - [`visitor`] - Generic traversal with build-context threading
//! - [`transform`] - Source AST to target AST
//! - [`codegen`] - Target AST to output text
//! - [`compiler`] - The whole pipeline, with options and observation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod target;
pub mod token;
pub mod transform;
pub mod visitor;

// Re-export main types for convenience
pub use ast::{Node, NodeKind};
pub use codegen::generate;
pub use compiler::{CompileObserver, CompileOptions, Compiler, Stage, compile};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use span::Span;
pub use target::{Identifier, TargetNode};
pub use token::{Token, TokenKind};
pub use transform::{Transformer, transform};
pub use visitor::{
    DepthCalculator, NodeCounter, Traversable, Traversal, Visitor, VisitorTable, traverse,
};
