//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use tinycall_foundation::{Error, ErrorKind, SemanticLimit, TokenKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lex_fields() {
    let err = Error::lex("unexpected character '#'", '#', 5, 1, 6, "(add #2)");
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
fn error_parse_fields() {
    let err = Error::parse("expected a function name", Some(TokenKind::Number), 3, 2);
    assert!(err.is_parse());
    assert!(!err.is_lex());
    assert!(matches!(
        err.kind,
        ErrorKind::ParseError {
            found: Some(TokenKind::Number),
            line: 3,
            column: 2,
            ..
        }
    ));
}

#[test]
fn error_structural_kinds() {
    assert!(matches!(
        Error::traversal("nested Program").kind,
        ErrorKind::TraversalError(_)
    ));
    assert!(matches!(
        Error::codegen("nested Program").kind,
        ErrorKind::CodeGenError(_)
    ));
    assert!(matches!(
        Error::limit_exceeded(SemanticLimit::MaxDepth { limit: 8 }).kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxDepth { limit: 8 })
    ));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_lex() {
    let err = Error::lex("unexpected character '#'", '#', 5, 1, 6, "(add #2)");
    assert_eq!(err.to_string(), "lex error at 1:6: unexpected character '#'");
}

#[test]
fn error_display_parse() {
    let err = Error::parse("unterminated call `add`", None, 1, 1);
    assert_eq!(err.to_string(), "parse error at 1:1: unterminated call `add`");
}

#[test]
fn error_display_structural() {
    assert_eq!(
        Error::traversal("bad tree").to_string(),
        "traversal error: bad tree"
    );
    assert_eq!(
        Error::codegen("bad tree").to_string(),
        "code generation error: bad tree"
    );
    assert_eq!(
        Error::limit_exceeded(SemanticLimit::MaxDepth { limit: 3 }).to_string(),
        "limit exceeded: max nesting depth (3) exceeded"
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::traversal("x"));
}

// =============================================================================
// Token Kinds
// =============================================================================

#[test]
fn token_kind_names() {
    let names: Vec<_> = [
        TokenKind::Paren,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Name,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, vec!["paren", "number", "string", "name"]);
}
