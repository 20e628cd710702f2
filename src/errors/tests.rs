//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lol".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lol".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "AN".to_string(),
            found: "5".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.line(), 42);
    assert_eq!(*error.get_position().1, "test.lol");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "R".to_string(),
            found: "ITZ".to_string(),
        },
        Position(3, Rc::new("test.lol".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert!(error.is_syntax_error());
    assert_eq!(
        error.to_string(),
        "Line 3: expected \"R\" but found \"ITZ\""
    );
}

#[test]
fn test_unexpected_end_of_input_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "AN".to_string(),
        },
        Position(7, Rc::new("test.lol".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert!(error.to_string().contains("unexpected end of input"));
    assert!(error.to_string().contains("AN"));
}

#[test]
fn test_expected_identifier_error() {
    let error = Error::new(
        ErrorImpl::ExpectedIdentifier {
            after: "I HAS A".to_string(),
            found: "42".to_string(),
        },
        Position(1, Rc::new("test.lol".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedIdentifier");
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::ExpectedIdentifier { .. }
    ));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.lol".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "AN".to_string(),
            found: "KTHXBYE".to_string(),
        },
        Position(0, Rc::new("test.lol".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `AN` but found `KTHXBYE`"),
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

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "expression".to_string(),
        },
        Position::null(),
    ));

    assert_eq!(
        error.to_string(),
        "Line 0: unexpected end of input, expected \"expression\""
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 200 },
        Position(7, Rc::new("test.lol".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(error.is_syntax_error());
    assert_eq!(
        error.to_string(),
        "Line 7: expression nested deeper than 200 levels"
    );
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(tip) if tip.contains("200")));
}
