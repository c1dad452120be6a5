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
        Position(10, Rc::new("test.adb".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.adb".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::TrailingTokens {
            token: ")".to_string(),
        },
        Position(7, Rc::new("test.adb".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token after expression: \")\" at test.adb:7"
    );
}

#[test]
fn test_no_viable_alternative_error() {
    let error = Error::new(
        ErrorImpl::NoViableAlternative {
            rule: "primary",
            alternatives: vec!["name", "aggregate"],
            token: "*".to_string(),
        },
        Position(0, Rc::new("test.adb".to_string())),
    );

    assert_eq!(error.get_error_name(), "NoViableAlternative");
    assert_eq!(
        error.get_tip().to_string(),
        "Expected primary (name, aggregate) but found `*`"
    );
    assert!(!error.is_fatal());
}

#[test]
fn test_operator_legality_errors_are_fatal() {
    let chained = Error::new(
        ErrorImpl::ChainedRelation {
            operator: "=".to_string(),
        },
        Position(0, Rc::new("test.adb".to_string())),
    );
    let mixed = Error::new(
        ErrorImpl::MixedLogicalOperators {
            first: "and".to_string(),
            second: "or".to_string(),
        },
        Position(0, Rc::new("test.adb".to_string())),
    );

    assert_eq!(chained.get_error_name(), "ChainedRelation");
    assert_eq!(mixed.get_error_name(), "MixedLogicalOperators");
    assert!(chained.is_fatal());
    assert!(mixed.is_fatal());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.adb".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: ",".to_string(),
            message: "expected `)`".to_string(),
        },
        Position(0, Rc::new("test.adb".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `,`, expected `)`"),
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
