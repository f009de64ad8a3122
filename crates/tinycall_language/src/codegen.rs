//! Code generator for the target AST.
//!
//! Renders C-style call syntax:
//!
//! ```
//! use tinycall_language::{TargetNode, generate};
//!
//! let program = TargetNode::program(vec![TargetNode::statement(TargetNode::call(
//!     "add",
//!     vec![TargetNode::number("2"), TargetNode::string("x")],
//! ))]);
//! assert_eq!(generate(&program).unwrap(), "add(2, \"x\");");
//! ```

use tinycall_foundation::{Error, Result};

use crate::target::TargetNode;

/// Renders a target tree to output text.
///
/// Statements in a program body are separated by `\n`. String literals are
/// wrapped in double quotes without escaping.
///
/// # Errors
/// Returns a code generation error if a `Program` appears below the root.
pub fn generate(node: &TargetNode) -> Result<String> {
    let mut generator = CodeGenerator::new();
    generator.emit(node, true)?;
    Ok(generator.output)
}

/// Code generator state.
#[derive(Debug, Default)]
struct CodeGenerator {
    output: String,
}

impl CodeGenerator {
    fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, node: &TargetNode, is_root: bool) -> Result<()> {
        match node {
            TargetNode::Program { body } => {
                if !is_root {
                    return Err(Error::codegen("Program node below the root"));
                }
                for (i, statement) in body.iter().enumerate() {
                    if i > 0 {
                        self.output.push('\n');
                    }
                    self.emit(statement, false)?;
                }
            }
            TargetNode::ExpressionStatement { expression } => {
                self.emit(expression, false)?;
                self.output.push(';');
            }
            TargetNode::CallExpression { callee, arguments } => {
                self.output.push_str(&callee.name);
                self.output.push('(');
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.emit(argument, false)?;
                }
                self.output.push(')');
            }
            TargetNode::Identifier(identifier) => self.output.push_str(&identifier.name),
            TargetNode::NumberLiteral { value } => self.output.push_str(value),
            TargetNode::StringLiteral { value } => {
                self.output.push('"');
                self.output.push_str(value);
                self.output.push('"');
            }
        }
        Ok(())
    }
}
