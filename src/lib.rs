//! # qmc-logic
//!
//! Exact minimization of Boolean formulas with the Quine-McCluskey algorithm
//! and Petrick's method.
//!
//! Given a formula over named variables and the constants `0`/`1`, the crate
//! produces a logically equivalent formula of lowest practical literal count,
//! together with the artifacts that explain how it got there: the truth
//! table, the per-pass prime-implicant trace, every minimal cover, and the
//! selected one.
//!
//! ## Overview
//!
//! The pipeline behind [`BoolExpr::simplify`]:
//!
//! 1. Collect the variables in first-occurrence order and build the truth
//!    table ([`TruthTable`]).
//! 2. Feed the true-row indices to the Quine-McCluskey engine
//!    ([`minimize::prime_implicants`]), which discovers every prime
//!    implicant by iterated adjacency merging.
//! 3. Build the coverage table ([`minimize::coverage_table`]) and expand it
//!    with Petrick's method ([`minimize::petrick`]) into all minimal covers.
//! 4. Pick the cover with the fewest literals, convert it back to a tree
//!    ([`minimize::cover_to_expr`]), and recognize XOR shapes
//!    ([`rewrite::rewrite`]).
//!
//! Truth tables grow as `2^n`, so the engine targets formulas of at most a
//! dozen variables.
//!
//! ## Example
//!
//! ```
//! use qmc_logic::BoolExpr;
//!
//! // Absorption falls out of the cover selection...
//! let expr = BoolExpr::parse("a & (a | b)")?;
//! assert_eq!(expr.simplify()?.to_string(), "a");
//!
//! // ...and sum-of-products XOR shapes are folded back.
//! let expr = BoolExpr::parse("(!a & b) | (a & !b)")?;
//! assert_eq!(expr.simplify()?.to_string(), "a ^ b");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## String-level API
//!
//! ```
//! use qmc_logic::{process, simplify_text, FormatOptions};
//!
//! assert_eq!(simplify_text("a & b | a & !b")?, "a");
//!
//! let output = process("a | !a", &FormatOptions::default())?;
//! assert_eq!(output.simplified, "1");
//! # Ok::<(), qmc_logic::ProcessError>(())
//! ```

pub mod expression;
pub mod minimize;
pub mod process;
pub mod rewrite;
pub mod table;

pub use expression::{
    BoolExpr, EvalError, ExprNode, FormatOptions, OperatorStyle, ParenStyle, ParseError,
    ParseErrorKind,
};
pub use minimize::{Diagnostics, Implicant, MinimizeError, TraceStep, TraceStepKind, Tri};
pub use process::{process, ProcessError, ProcessOutput};
pub use table::{TruthTable, TruthTableRow};

pub use qmc_logic_macros::expr;

use std::collections::HashMap;
use std::sync::Arc;

/// Parse a formula, minimize it, and render the result
///
/// Shorthand for [`process`] when only the minimized string matters.
///
/// # Examples
///
/// ```
/// use qmc_logic::simplify_text;
///
/// assert_eq!(simplify_text("!(a & b)")?, "!a | !b");
/// assert_eq!(simplify_text("a & !a")?, "0");
/// # Ok::<(), qmc_logic::ProcessError>(())
/// ```
pub fn simplify_text(input: &str) -> Result<String, ProcessError> {
    let expr = BoolExpr::parse(input)?;
    let minimized = expr.simplify()?;
    Ok(minimized.to_string())
}

/// Parse a formula and evaluate it under an assignment
///
/// # Examples
///
/// ```
/// use qmc_logic::eval_text;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let mut assignment = HashMap::new();
/// assignment.insert(Arc::from("a"), true);
/// assignment.insert(Arc::from("b"), false);
///
/// assert_eq!(eval_text("a ^ b", &assignment)?, true);
/// # Ok::<(), qmc_logic::ProcessError>(())
/// ```
pub fn eval_text(
    input: &str,
    assignment: &HashMap<Arc<str>, bool>,
) -> Result<bool, ProcessError> {
    let expr = BoolExpr::parse(input)?;
    Ok(expr.evaluate(assignment)?)
}

/// Parse a formula and build its truth table
///
/// # Examples
///
/// ```
/// use qmc_logic::truth_table_text;
///
/// let table = truth_table_text("a & b")?;
/// assert_eq!(table.minterms(), [3]);
/// # Ok::<(), qmc_logic::ParseError>(())
/// ```
pub fn truth_table_text(input: &str) -> Result<TruthTable, ParseError> {
    Ok(TruthTable::from_expr(&BoolExpr::parse(input)?))
}
