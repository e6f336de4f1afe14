//! Unit tests for error handling.
//!
//! This module contains tests for error messages, names and tips.

use pretty_assertions::assert_eq;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn { found: TokenKind::Plus },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Int,
        },
        Position(2),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected identifier but got integer");
}

#[test]
fn test_unexpected_symbol_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::EOF,
        },
        Position(6),
    );

    assert_eq!(error.to_string(), "expected `)` but got end of input");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { found: TokenKind::Assignment }, Position(0));

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for `=` found");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_integer_parse_error() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(error.to_string(), "could not parse \"99999999999999999999\" as integer");
}

#[test]
fn test_illegal_token_tip() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { found: TokenKind::Illegal }, Position(0));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
