//! Integration tests for Layer 1: Language
//!
//! Tests for lexer, parser, traversal, transformer, and code generator.

mod codegen;
mod lexer;
mod transform;
mod visitor;
