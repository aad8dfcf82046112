use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal fault raised by the parser or the interpreter.
///
/// Parse faults carry the index of the token being read; runtime faults
/// have no position.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn runtime(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::EmptyValueStack => "EmptyValueStack",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Ran out of tokens, is a closing bracket or semicolon missing?",
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::FunctionNotDeclared { function } => {
                ErrorTip::Suggestion(format!("Function `{}` not declared", function))
            }
            ErrorImpl::InvalidAssignmentTarget { target } => ErrorTip::Suggestion(format!(
                "Only a variable name can be assigned, found `{}`",
                target
            )),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::EmptyValueStack => ErrorTip::None,
            ErrorImpl::OutputFailed { message } => {
                ErrorTip::Suggestion(format!("Could not write output: {}", message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at token {}", self.internal_error, position.0),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("function {function:?} not declared")]
    FunctionNotDeclared { function: String },
    #[error("cannot assign to {target:?}")]
    InvalidAssignmentTarget { target: String },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("value stack is empty")]
    EmptyValueStack,
    #[error("failed to write output: {message}")]
    OutputFailed { message: String },
}
