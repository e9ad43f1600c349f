//! Top-level error type for the logical crate
//!
//! Each stage (lexing, parsing, evaluating) has its own error type in
//! [`crate::expression::error`]. [`LogicError`] unifies them for callers that
//! run several stages in one go, such as [`crate::parse`].

use crate::expression::error::{EvalError, LexError, ParseError};
use std::fmt;
use std::io;

/// Any error the library can return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// The source text contained a character outside the expression alphabet
    Lex(LexError),
    /// The token sequence was not a well-formed expression
    Parse(ParseError),
    /// Evaluation or enumeration failed
    Eval(EvalError),
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Lex(err) => write!(f, "{}", err),
            LogicError::Parse(err) => write!(f, "{}", err),
            LogicError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Lex(err) => Some(err),
            LogicError::Parse(err) => Some(err),
            LogicError::Eval(err) => Some(err),
        }
    }
}

impl From<LexError> for LogicError {
    fn from(err: LexError) -> Self {
        LogicError::Lex(err)
    }
}

impl From<ParseError> for LogicError {
    fn from(err: ParseError) -> Self {
        LogicError::Parse(err)
    }
}

impl From<EvalError> for LogicError {
    fn from(err: EvalError) -> Self {
        LogicError::Eval(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Lex(e) => e.into(),
            LogicError::Parse(e) => e.into(),
            LogicError::Eval(e) => e.into(),
        }
    }
}
