//! Parser for tinycall.
//!
//! Recursive descent over a token slice with one token of lookahead:
//!
//! ```text
//! program := atom*
//! atom    := Number | String | call
//! call    := '(' Name atom* ')'
//! ```

use tinycall_foundation::{Error, Result, SemanticLimit, TokenKind};

use crate::ast::Node;
use crate::span::Span;
use crate::token::Token;

/// Parser for a tinycall token sequence.
pub struct Parser<'t> {
    /// The tokens being parsed.
    tokens: &'t [Token],
    /// Index of the current token (lookahead).
    current: usize,
    /// Current call nesting depth.
    depth: usize,
    /// Maximum call nesting depth, if bounded.
    max_depth: Option<usize>,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over the given tokens.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            max_depth: None,
        }
    }

    /// Bounds call nesting depth; deeper input fails with a limit error.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole token sequence into a `Program`.
    ///
    /// # Errors
    /// Returns a parse error if the tokens violate the grammar.
    pub fn parse_program(&mut self) -> Result<Node> {
        let mut body = Vec::new();
        while let Some(token) = self.peek() {
            body.push(self.parse_atom(token)?);
        }
        Ok(Node::Program { body })
    }

    /// Parses one atom starting at `token`, the current token: a number, a
    /// string, or a call.
    fn parse_atom(&mut self, token: &'t Token) -> Result<Node> {
        match token.kind {
            TokenKind::Number => {
                let value = token.text.clone();
                self.advance();
                Ok(Node::NumberLiteral { value })
            }
            TokenKind::String => {
                let value = token.text.clone();
                self.advance();
                Ok(Node::StringLiteral { value })
            }
            TokenKind::Paren if token.is_open_paren() => self.parse_call(),
            TokenKind::Paren | TokenKind::Name => {
                Err(self.error_at(token, format!("unexpected {}", token.describe())))
            }
        }
    }

    /// Parses a call: `'(' Name atom* ')'`.
    fn parse_call(&mut self) -> Result<Node> {
        let open = self.current;
        self.advance(); // consume '('

        self.depth += 1;
        if let Some(limit) = self.max_depth {
            if self.depth > limit {
                return Err(Error::limit_exceeded(SemanticLimit::MaxDepth { limit }));
            }
        }

        let name = match self.peek() {
            Some(token) if token.kind == TokenKind::Name => token.text.clone(),
            Some(token) => {
                return Err(self.error_at(
                    token,
                    format!("expected a function name, found {}", token.describe()),
                ));
            }
            None => return Err(self.error_at_end("expected a function name")),
        };
        self.advance();

        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.is_close_paren() => break,
                Some(token) => params.push(self.parse_atom(token)?),
                None => {
                    let span = self.tokens[open].span;
                    return Err(Error::parse(
                        format!("unterminated call `{name}`"),
                        None,
                        span.line,
                        span.column,
                    ));
                }
            }
        }
        self.advance(); // consume ')'
        self.depth -= 1;

        Ok(Node::CallExpression { name, params })
    }

    /// Returns the current token.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current += 1;
    }

    /// Creates a parse error at a token.
    fn error_at(&self, token: &Token, message: String) -> Error {
        Error::parse(message, Some(token.kind), token.span.line, token.span.column)
    }

    /// Creates a parse error for input that ended too early.
    fn error_at_end(&self, message: &str) -> Error {
        let span = self.end_span();
        Error::parse(
            format!("{message}, found end of input"),
            None,
            span.line,
            span.column,
        )
    }

    /// Position just past the last token.
    fn end_span(&self) -> Span {
        self.tokens.last().map_or(Span::new(0, 0, 1, 1), |t| {
            let width = u32::try_from(t.span.len()).unwrap_or(u32::MAX);
            Span::new(
                t.span.end,
                t.span.end,
                t.span.line,
                t.span.column.saturating_add(width),
            )
        })
    }
}

/// Parses a token sequence into a source `Program`.
///
/// # Errors
/// Returns a parse error if the tokens violate the grammar.
pub fn parse(tokens: &[Token]) -> Result<Node> {
    Parser::new(tokens).parse_program()
}
