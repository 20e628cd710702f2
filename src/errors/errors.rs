use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A located front-end error. The parser raises at most one of these per parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The 1-based source line the error was raised at.
    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for every error raised by the parser (as opposed to the lexer).
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::UnrecognisedToken { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting `{}`, is the statement complete?",
                expected
            )),
            ErrorImpl::ExpectedIdentifier { after, found } => ErrorTip::Suggestion(format!(
                "Expected an identifier after `{}` but found `{}`",
                after, found
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep, split this one up",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.position.0, self.internal_error)
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
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected:?} but found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected:?}")]
    UnexpectedEndOfInput { expected: String },
    #[error("expected identifier after {after:?} but found {found:?}")]
    ExpectedIdentifier { after: String, found: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
