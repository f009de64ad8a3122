//! Lexer for tinycall source.
//!
//! The lexer converts source text into a stream of tokens. It is an
//! iterator of `Result<Token>` and stops after the first error.

use tinycall_foundation::{Error, Result};

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for tinycall source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Set once an error has been returned.
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            failed: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns a lex error for a character no rule accepts, or for a string
    /// literal missing its closing quote.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        let (kind, text) = match c {
            '(' | ')' => {
                self.advance();
                (TokenKind::Paren, c.to_string())
            }
            '"' => (TokenKind::String, self.scan_string()?),
            c if c.is_ascii_digit() => (
                TokenKind::Number,
                self.scan_while(|c| c.is_ascii_digit()).to_string(),
            ),
            c if c.is_ascii_alphabetic() => (
                TokenKind::Name,
                self.scan_while(|c| c.is_ascii_alphabetic()).to_string(),
            ),
            c => {
                return Err(self.error_here(format!("unexpected character '{c}'"), c));
            }
        };

        Ok(Some(Token::new(
            kind,
            text,
            Span::new(start, self.position, start_line, start_column),
        )))
    }

    /// Tokenizes all source.
    ///
    /// # Errors
    /// Returns the first lex error encountered.
    pub fn tokenize_all(source: &str) -> Result<Vec<Token>> {
        Lexer::new(source).collect()
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes the maximal run of characters matching `pred`.
    fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let source = self.source;
        let start = self.position;
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
        &source[start..self.position]
    }

    /// Scans a string literal. Contents are taken verbatim; there are no
    /// escape sequences.
    fn scan_string(&mut self) -> Result<String> {
        let quote_error = self.error_here("unterminated string literal", '"');
        self.advance(); // consume opening '"'

        let text = self.scan_while(|c| c != '"').to_string();
        if self.peek_char().is_none() {
            return Err(quote_error);
        }
        self.advance(); // consume closing '"'
        Ok(text)
    }

    /// Creates a lex error at the current position.
    fn error_here(&self, message: impl Into<String>, character: char) -> Error {
        Error::lex(
            message,
            character,
            self.position,
            self.line,
            self.column,
            self.line_at(self.position),
        )
    }

    /// Returns the source line containing the byte offset.
    fn line_at(&self, offset: usize) -> &'src str {
        let source = self.source;
        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);
        &source[line_start..line_end]
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokenizes source text into an ordered token sequence.
///
/// # Errors
/// Returns the first lex error encountered.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::tokenize_all(source)
}
