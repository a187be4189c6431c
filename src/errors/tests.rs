//! Unit tests for error handling.
//!
//! This module contains tests for error types, taxonomy classes and
//! conversion into user-facing diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Severity};
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Span::null(),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_class(), "LexError");
    assert!(!error.is_fatal());
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Span::null(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_class(), "SyntaxError");
}

#[test]
fn test_mixed_call_arguments_error() {
    let error = Error::new(ErrorImpl::MixedCallArguments, Span::null());

    assert_eq!(error.get_error_name(), "MixedCallArguments");
    assert_eq!(error.get_class(), "SyntaxError");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("positional")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_ambiguous_variant_shape_error() {
    let error = Error::new(
        ErrorImpl::AmbiguousVariantShape {
            variant: "Transfer".to_string(),
        },
        Span::null(),
    );

    assert_eq!(error.get_class(), "AmbiguousVariantShape");
    assert!(!error.is_fatal());
}

#[test]
fn test_recursion_limit_is_fatal() {
    let error = Error::new(ErrorImpl::RecursionLimitExceeded, Span::null());

    assert_eq!(error.get_class(), "RecursionLimitExceeded");
    assert!(error.is_fatal());
}

#[test]
fn test_into_diagnostic() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Span::null(),
    );

    let diagnostic = error.into_diagnostic();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.starts_with("SyntaxError:"));
    assert!(diagnostic.message.contains(")"));
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}
