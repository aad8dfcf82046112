//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
        },
        Position(3),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position(42));

    assert_eq!(error.get_position(), Some(&Position(42)));
    assert_eq!(error.to_string(), "unexpected end of input at token 42");
}

#[test]
fn test_runtime_error_has_no_position() {
    let error = Error::runtime(ErrorImpl::DivisionByZero);

    assert!(error.get_position().is_none());
    assert_eq!(error.to_string(), "division by zero");
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::runtime(ErrorImpl::VariableNotDeclared {
        variable: "foo".to_string(),
    });

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_tip().to_string(), "Variable `foo` not declared");
}

#[test]
fn test_function_not_declared_error() {
    let error = Error::runtime(ErrorImpl::FunctionNotDeclared {
        function: "fib".to_string(),
    });

    assert_eq!(error.get_error_name(), "FunctionNotDeclared");
    assert_eq!(error.to_string(), "function \"fib\" not declared");
}

#[test]
fn test_missing_arguments_error() {
    let error = Error::runtime(ErrorImpl::MissingArguments {
        expected: 3,
        received: 1,
    });

    assert_eq!(error.get_error_name(), "MissingArguments");
    assert_eq!(error.get_tip().to_string(), "Expected 3 arguments, received 1");
}

#[test]
fn test_error_tip_none() {
    let error = Error::runtime(ErrorImpl::EmptyValueStack);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0),
    );

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

#[test]
fn test_output_failed_error() {
    let error = Error::runtime(ErrorImpl::OutputFailed {
        message: "broken pipe".to_string(),
    });

    assert_eq!(error.get_error_name(), "OutputFailed");
    assert_eq!(error.to_string(), "failed to write output: broken pipe");
    assert_eq!(
        error.get_tip().to_string(),
        "Could not write output: broken pipe"
    );
}
