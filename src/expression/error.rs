//! Error types for tokenizing, parsing and evaluating expressions

use std::fmt;
use std::io;
use std::sync::Arc;

/// A character the lexer does not recognise
///
/// Returned by [`tokenize`](super::tokenize) for any character outside the
/// operator, parenthesis, identifier and whitespace alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending character
    pub character: char,
    /// Byte offset of the character in the source text
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected character {:?} at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for io::Error {
    fn from(err: LexError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// The reason a token sequence failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token sequence was empty
    EmptyExpression,
    /// A complete expression was followed by more tokens
    TrailingInput,
    /// An operand was expected but an operator, `)` or the end of input was found
    ExpectedOperand,
    /// A `(` was never closed
    UnclosedParen,
    /// A `)` appeared without a matching `(`
    UnmatchedCloseParen,
    /// Nesting exceeded the configured depth limit
    TooDeep {
        /// The configured maximum depth
        limit: usize,
    },
    /// The source text exceeded the configured size limit
    InputTooLarge {
        /// Length of the rejected input in bytes
        size: usize,
        /// The configured maximum size in bytes
        limit: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyExpression => write!(f, "empty expression"),
            ParseErrorKind::TrailingInput => write!(f, "trailing input after expression"),
            ParseErrorKind::ExpectedOperand => write!(f, "expected operand"),
            ParseErrorKind::UnclosedParen => write!(f, "missing closing ')'"),
            ParseErrorKind::UnmatchedCloseParen => write!(f, "missing opening '('"),
            ParseErrorKind::TooDeep { limit } => {
                write!(f, "expression nesting exceeds maximum depth of {}", limit)
            }
            ParseErrorKind::InputTooLarge { size, limit } => write!(
                f,
                "expression is {} bytes, exceeding the maximum of {} bytes",
                size, limit
            ),
        }
    }
}

/// A structurally invalid token sequence
///
/// Parsing never repairs its input: any of the [`ParseErrorKind`] conditions
/// aborts the parse and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Why the parse failed
    pub kind: ParseErrorKind,
    /// Index of the offending token, when there is one
    pub index: Option<usize>,
    /// Byte offset of the offending token in the source text, when parsing from text
    pub position: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, index: Option<usize>) -> Self {
        ParseError {
            kind,
            index,
            position: None,
        }
    }

    pub(crate) fn with_position(mut self, position: Option<usize>) -> Self {
        self.position = position;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.position, self.index) {
            (Some(pos), _) => write!(
                f,
                "Failed to parse expression at position {}: {}",
                pos, self.kind
            ),
            (None, Some(index)) => write!(
                f,
                "Failed to parse expression at token {}: {}",
                index, self.kind
            ),
            (None, None) => write!(f, "Failed to parse expression: {}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable referenced by the expression has no value in the valuation
    MissingVariable {
        /// Name of the unassigned variable
        name: Arc<str>,
    },
    /// Truth-table enumeration was asked for more variables than allowed
    TooManyVariables {
        /// Number of distinct variables in the expression
        count: usize,
        /// The configured maximum
        limit: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingVariable { name } => {
                write!(f, "Variable '{}' is not assigned a value", name)
            }
            EvalError::TooManyVariables { count, limit } => write!(
                f,
                "Expression has {} variables; truth tables are limited to {}",
                count, limit
            ),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
