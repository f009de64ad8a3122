//! tinycall - a tiny prefix-call to C-style call compiler
//!
//! This crate re-exports all layers of the tinycall system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tinycall_debug       Compile tracing and trace formatting
//! Layer 1: tinycall_language    Lexer, parser, traversal, transformer, codegen
//! Layer 0: tinycall_foundation  Core types (Error, ErrorKind, limits)
//! ```
//!
//! # Example
//!
//! ```
//! let output = tinycall::language::compile("(add 2 (subtract 4 2))").unwrap();
//! assert_eq!(output, "add(2, subtract(4, 2));");
//! ```

pub use tinycall_debug as debug;
pub use tinycall_foundation as foundation;
pub use tinycall_language as language;
