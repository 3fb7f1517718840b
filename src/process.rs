//! One-shot text processing: parse, minimize, tabulate
//!
//! [`process`] is the convenience entry point a front end would call once
//! per submitted formula: it parses the input, minimizes it, renders the
//! result with the caller's formatting options, and returns the truth table
//! and the minimization diagnostics alongside.

use crate::expression::{BoolExpr, EvalError, FormatOptions, ParseError};
use crate::minimize::{Diagnostics, MinimizeError};
use crate::table::TruthTable;
use serde::Serialize;
use std::fmt;

/// Everything [`process`] produces for one input formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutput {
    /// The minimized formula, rendered with the requested options
    pub simplified: String,
    /// Truth table of the input formula
    pub table: TruthTable,
    /// The minimization diagnostics
    pub diagnostics: Diagnostics,
}

/// Errors from the string-level entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The input string failed to parse
    Parse(ParseError),
    /// Evaluation hit an unbound variable
    Eval(EvalError),
    /// The minimizer violated an internal invariant
    Minimize(MinimizeError),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Parse(err) => write!(f, "{}", err),
            ProcessError::Eval(err) => write!(f, "{}", err),
            ProcessError::Minimize(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Parse(err) => Some(err),
            ProcessError::Eval(err) => Some(err),
            ProcessError::Minimize(err) => Some(err),
        }
    }
}

impl From<ParseError> for ProcessError {
    fn from(err: ParseError) -> Self {
        ProcessError::Parse(err)
    }
}

impl From<EvalError> for ProcessError {
    fn from(err: EvalError) -> Self {
        ProcessError::Eval(err)
    }
}

impl From<MinimizeError> for ProcessError {
    fn from(err: MinimizeError) -> Self {
        ProcessError::Minimize(err)
    }
}

/// Parse a formula, minimize it, and collect the diagnostic artifacts
///
/// # Examples
///
/// ```
/// use qmc_logic::{process, FormatOptions};
///
/// let output = process("a & (a | b)", &FormatOptions::default())?;
/// assert_eq!(output.simplified, "a");
/// assert_eq!(output.table.rows().len(), 4);
/// assert_eq!(output.diagnostics.minterms, [2, 3]);
/// # Ok::<(), qmc_logic::ProcessError>(())
/// ```
pub fn process(input: &str, options: &FormatOptions) -> Result<ProcessOutput, ProcessError> {
    let expr = BoolExpr::parse(input)?;
    let table = TruthTable::from_expr(&expr);
    let (minimized, diagnostics) = expr.simplify_with_diagnostics()?;

    Ok(ProcessOutput {
        simplified: minimized.format(options),
        table,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{OperatorStyle, ParenStyle};

    #[test]
    fn test_process_collects_all_artifacts() {
        let output = process("(!a & b) | (a & !b)", &FormatOptions::default()).unwrap();
        assert_eq!(output.simplified, "a ^ b");
        assert_eq!(output.table.minterms(), [1, 2]);
        assert_eq!(output.diagnostics.prime_implicants.len(), 2);
    }

    #[test]
    fn test_process_respects_format_options() {
        let options = FormatOptions {
            operators: OperatorStyle::Word,
            parentheses: ParenStyle::Full,
        };
        let output = process("a | b & c", &options).unwrap();
        assert_eq!(output.simplified, "(a OR (b AND c))");
    }

    #[test]
    fn test_process_propagates_parse_errors() {
        let err = process("a &", &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessError::Parse(_)));
    }
}
