//! Error types for parsing and evaluating boolean expressions

use std::fmt;
use std::io;
use std::sync::Arc;

/// What went wrong while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An opening parenthesis was never closed
    MissingClosingParen,
    /// The input ended (or hit a token that cannot start an operand) where an
    /// operand was expected
    UnexpectedEnd,
    /// A complete expression was parsed but tokens remain
    UnexpectedTrailingTokens,
}

/// Errors returned by [`BoolExpr::parse`](crate::BoolExpr::parse)
///
/// `position` is the byte offset into the input where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::MissingClosingParen => {
                write!(f, "missing closing parenthesis at position {}", self.position)
            }
            ParseErrorKind::UnexpectedEnd => {
                write!(f, "expression ended unexpectedly at position {}", self.position)
            }
            ParseErrorKind::UnexpectedTrailingTokens => {
                write!(f, "unexpected trailing tokens at position {}", self.position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors returned by [`BoolExpr::evaluate`](crate::BoolExpr::evaluate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment lacks a variable that appears in the expression
    UnboundVariable(Arc<str>),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => {
                write!(f, "variable {:?} is not bound in the assignment", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}
