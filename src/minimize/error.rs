//! Error type for the minimization pipeline

use std::fmt;

/// Errors from [`BoolExpr::simplify`](crate::BoolExpr::simplify)
///
/// The pipeline is total over well-formed expressions; this error signals a
/// broken internal invariant, not a bad input. Callers should treat it as
/// fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimizeError {
    /// Petrick's method produced no cover although minterms exist
    NoMinimalCover,
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::NoMinimalCover => {
                write!(f, "no minimal cover found for a non-empty minterm set")
            }
        }
    }
}

impl std::error::Error for MinimizeError {}
