//! Integration tests for the lexer
//!
//! Tests tokenization of tinycall source text.

use tinycall_foundation::ErrorKind;
use tinycall_language::{Lexer, Span, TokenKind, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_reference_program() {
    let tokens = tokenize("(add 2 (subtract 4 2))").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["(", "add", "2", "(", "subtract", "4", "2", ")", ")"]
    );
    assert_eq!(
        kinds("(add 2 (subtract 4 2))"),
        vec![
            TokenKind::Paren,
            TokenKind::Name,
            TokenKind::Number,
            TokenKind::Paren,
            TokenKind::Name,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Paren,
            TokenKind::Paren,
        ]
    );
}

#[test]
fn tokenize_empty_and_whitespace() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t\r\n\u{a0}").unwrap().is_empty());
}

#[test]
fn tokenize_string_strips_quotes() {
    let tokens = tokenize("\"hello world\"").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "hello world");
    assert_eq!(tokens[0].span, Span::new(0, 13, 1, 1));
}

#[test]
fn tokenize_string_is_verbatim() {
    let tokens = tokenize(r#""a\nb(c)""#).unwrap();
    assert_eq!(tokens[0].text, r"a\nb(c)");
}

#[test]
fn tokenize_adjacent_runs_split_by_class() {
    let tokens = tokenize("abc123def").unwrap();
    let parts: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        parts,
        vec![
            (TokenKind::Name, "abc"),
            (TokenKind::Number, "123"),
            (TokenKind::Name, "def"),
        ]
    );
}

#[test]
fn tokenize_tracks_lines_and_columns() {
    let tokens = tokenize("(a\n  12)").unwrap();
    assert_eq!((tokens[2].span.line, tokens[2].span.column), (2, 3));
    assert_eq!(tokens[2].span.text("(a\n  12)"), "12");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn tokenize_rejects_unknown_character() {
    let err = tokenize("(add #2)").unwrap_err();
    match err.kind {
        ErrorKind::LexError {
            character,
            offset,
            line,
            column,
            context,
            ..
        } => {
            assert_eq!(character, '#');
            assert_eq!(offset, 5);
            assert_eq!((line, column), (1, 6));
            assert_eq!(context, "(add #2)");
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn tokenize_error_context_is_offending_line() {
    let err = tokenize("(a)\n(b %)\n(c)").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LexError { ref context, line: 2, column: 4, .. } if context == "(b %)"
    ));
}

#[test]
fn tokenize_rejects_unterminated_string() {
    let err = tokenize("(f \"abc").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LexError {
            character: '"',
            offset: 3,
            ..
        }
    ));
}

#[test]
fn tokenize_rejects_non_ascii_names() {
    assert!(tokenize("(café)").unwrap_err().is_lex());
    assert!(tokenize("(f ١)").unwrap_err().is_lex());
}

// =============================================================================
// Iterator Behavior
// =============================================================================

#[test]
fn lexer_iterator_fuses_after_error() {
    let mut lexer = Lexer::new("(a $ b)");
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_next_token_reports_end() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.next_token().unwrap().map(|t| t.text), Some("7".to_string()));
    assert!(lexer.next_token().unwrap().is_none());
}
