//! Compile pipeline: lex, parse, transform, generate.
//!
//! [`compile`] runs the four stages with default options. A [`Compiler`]
//! carries [`CompileOptions`] and can report each stage to a
//! [`CompileObserver`], which is how the debug tracer hooks in.

use std::fmt;

use tinycall_foundation::{Error, Result};

use crate::ast::Node;
use crate::codegen::generate;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::target::TargetNode;
use crate::transform::Transformer;
use crate::visitor::NodeCounter;

/// A stage of the compile pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Source text to tokens.
    Lex,
    /// Tokens to source AST.
    Parse,
    /// Source AST to target AST.
    Transform,
    /// Target AST to output text.
    Generate,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Self; 4] = [Self::Lex, Self::Parse, Self::Transform, Self::Generate];

    /// Lowercase stage name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lex => "lex",
            Self::Parse => "parse",
            Self::Transform => "transform",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives progress notifications from a [`Compiler`].
///
/// Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait CompileObserver {
    /// A compile of `input_len` bytes is starting.
    fn compile_started(&mut self, input_len: usize) {}

    /// A stage is starting.
    fn stage_started(&mut self, stage: Stage) {}

    /// A stage finished. `produced` is the number of tokens, nodes, or output
    /// bytes the stage produced.
    fn stage_finished(&mut self, stage: Stage, produced: usize) {}

    /// A stage failed; the compile stops here.
    fn stage_failed(&mut self, stage: Stage, error: &Error) {}

    /// The compile is over.
    fn compile_finished(&mut self, success: bool) {}
}

/// Observer that ignores everything.
impl CompileObserver for () {}

/// Options for a [`Compiler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum call nesting depth; `None` is unlimited.
    pub max_depth: Option<usize>,
}

impl CompileOptions {
    /// Creates default options.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Sets the maximum call nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Runs the compile pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Creates a compiler with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: CompileOptions::new(),
        }
    }

    /// Creates a compiler with the given options.
    #[must_use]
    pub const fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles `source` to output text.
    ///
    /// # Errors
    /// Returns the first lex, parse, traversal, code generation, or limit
    /// error encountered.
    pub fn compile(&self, source: &str) -> Result<String> {
        self.compile_observed(source, &mut ())
    }

    /// Compiles `source`, reporting each stage to `observer`.
    ///
    /// # Errors
    /// Returns the first error encountered; the observer sees it first
    /// through [`CompileObserver::stage_failed`].
    pub fn compile_observed<O>(&self, source: &str, observer: &mut O) -> Result<String>
    where
        O: CompileObserver + ?Sized,
    {
        observer.compile_started(source.len());
        let result = self.run_stages(source, observer);
        observer.compile_finished(result.is_ok());
        result
    }

    fn run_stages<O>(&self, source: &str, observer: &mut O) -> Result<String>
    where
        O: CompileObserver + ?Sized,
    {
        let tokens = run_stage(observer, Stage::Lex, Vec::len, || {
            Lexer::tokenize_all(source)
        })?;

        let max_depth = self.options.max_depth;
        let program = run_stage(
            observer,
            Stage::Parse,
            |node: &Node| NodeCounter::count(node).total(),
            || Parser::new(&tokens).with_max_depth(max_depth).parse_program(),
        )?;

        let target = run_stage(
            observer,
            Stage::Transform,
            |node: &TargetNode| NodeCounter::count(node).total(),
            || Transformer::new().transform(&program),
        )?;

        run_stage(observer, Stage::Generate, String::len, || generate(&target))
    }
}

/// Runs one stage, bracketing it with observer notifications.
fn run_stage<O, T, M, F>(observer: &mut O, stage: Stage, measure: M, f: F) -> Result<T>
where
    O: CompileObserver + ?Sized,
    M: FnOnce(&T) -> usize,
    F: FnOnce() -> Result<T>,
{
    observer.stage_started(stage);
    match f() {
        Ok(value) => {
            observer.stage_finished(stage, measure(&value));
            Ok(value)
        }
        Err(e) => {
            observer.stage_failed(stage, &e);
            Err(e)
        }
    }
}

/// Compiles `source` to output text with default options.
///
/// # Errors
/// Returns the first error from any stage.
///
/// # Example
///
/// ```
/// use tinycall_language::compile;
///
/// assert_eq!(compile("(add 2 (subtract 4 2))").unwrap(), "add(2, subtract(4, 2));");
/// ```
pub fn compile(source: &str) -> Result<String> {
    Compiler::new().compile(source)
}
