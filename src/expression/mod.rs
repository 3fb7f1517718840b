//! Boolean expression trees with operator overloading and parsing support
//!
//! This module provides the [`BoolExpr`] tree representation that the rest of
//! the crate operates on. Expressions can be constructed three ways:
//!
//! 1. Method API: `a.and(&b).or(&c)`
//! 2. Operator overloading: `&a * &b + &c` (and `&a ^ &b` for XOR)
//! 3. The `expr!` macro: `expr!(a * b + c)`
//!
//! or parsed from strings with [`BoolExpr::parse`].
//!
//! # Quick Start
//!
//! ```
//! use qmc_logic::BoolExpr;
//!
//! let expr = BoolExpr::parse("a & (a | b)")?;
//! let minimized = expr.simplify()?;
//! assert_eq!(minimized.to_string(), "a");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Evaluation
//!
//! ```
//! use qmc_logic::BoolExpr;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let expr = BoolExpr::parse("a ^ b")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("a"), true);
//! assignment.insert(Arc::from("b"), false);
//! assert_eq!(expr.evaluate(&assignment)?, true);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

pub mod ast;
mod display;
mod eval;
pub mod error;
mod operators;
mod parser;

#[cfg(test)]
mod tests;

pub use ast::ExprNode;
pub use display::{FormatOptions, OperatorStyle, ParenStyle};
pub use error::{EvalError, ParseError, ParseErrorKind};

use crate::minimize::{self, Diagnostics, MinimizeError};

/// Inner representation of a boolean expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BoolExprInner {
    /// A named variable
    Variable(Arc<str>),
    /// Logical AND of two expressions
    And(BoolExpr, BoolExpr),
    /// Logical OR of two expressions
    Or(BoolExpr, BoolExpr),
    /// Logical XOR of two expressions
    Xor(BoolExpr, BoolExpr),
    /// Logical NOT of an expression
    Not(BoolExpr),
    /// A constant value (true or false)
    Constant(bool),
}

/// A boolean expression tree
///
/// All connectives are strictly binary and equality is structural: two
/// expressions compare equal iff they are the same tree. Constructors never
/// normalize - `a & 1` stays `a & 1` until [`simplify`](Self::simplify) runs.
///
/// Uses `Arc` internally so cloning a subtree is cheap.
///
/// # Examples
///
/// ## Method-based API
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = a.and(&b).or(&a.not());
/// ```
///
/// ## Operator overloading (requires explicit &)
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = &(&a * &b) + &(!&a);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoolExpr {
    inner: Arc<BoolExprInner>,
}

impl BoolExpr {
    /// Create a variable expression with the given name
    ///
    /// Names are case-preserving: `X` and `x` are distinct variables.
    pub fn variable(name: &str) -> Self {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Variable(Arc::from(name))),
        }
    }

    pub(crate) fn variable_arc(name: Arc<str>) -> Self {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Variable(name)),
        }
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Constant(value)),
        }
    }

    /// Logical AND: the conjunction of this expression and another
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::And(self.clone(), other.clone())),
        }
    }

    /// Logical OR: the disjunction of this expression and another
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Or(self.clone(), other.clone())),
        }
    }

    /// Logical XOR: true iff exactly one of the two operands is true
    pub fn xor(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Xor(self.clone(), other.clone())),
        }
    }

    /// Logical NOT: the negation of this expression
    pub fn not(&self) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Not(self.clone())),
        }
    }

    /// Parse a boolean expression from a string
    ///
    /// Accepted operators (several spellings each):
    /// - NOT: `!`, `~`, `NOT`
    /// - AND: `&`, `&&`, `*`, `AND`
    /// - OR: `|`, `||`, `+`, `OR`
    /// - XOR: `^`, `XOR`
    /// - parentheses for grouping
    /// - constants `0`, `1`, `true`, `false` (case-insensitive)
    ///
    /// Word operators match case-insensitively and must be bounded by
    /// non-alphanumeric characters, so `NOTE` is a variable, not `NOT E`.
    /// Characters outside the token set are skipped.
    ///
    /// Precedence, loosest to tightest: OR, XOR, AND, NOT.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("!(a & b) | c ^ d")?;
    /// let same = BoolExpr::parse("NOT (a AND b) OR c XOR d")?;
    /// assert_eq!(expr, same);
    /// # Ok::<(), qmc_logic::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Collect the variables of this expression in first-occurrence order
    ///
    /// The order is a left-to-right depth-first traversal, each name reported
    /// once. This order is canonical for the expression: it fixes the bit
    /// layout of truth table rows and minterm indices (the first variable is
    /// the most significant bit).
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("b & a | b & c")?;
    /// let names: Vec<&str> = expr.variables().iter().map(|v| v.as_ref()).collect();
    /// assert_eq!(names, ["b", "a", "c"]);
    /// # Ok::<(), qmc_logic::ParseError>(())
    /// ```
    pub fn variables(&self) -> Vec<Arc<str>> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                if !vars.iter().any(|v| v == name) {
                    vars.push(Arc::clone(name));
                }
            }
            BoolExprInner::And(left, right)
            | BoolExprInner::Or(left, right)
            | BoolExprInner::Xor(left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
            BoolExprInner::Not(inner) => inner.collect_variables(vars),
            BoolExprInner::Constant(_) => {}
        }
    }

    /// Count the literals of this expression
    ///
    /// A literal is a variable leaf (negated or not); `!a | !a` counts two.
    /// Constants count zero.
    pub fn literal_count(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Constant(_) => 0,
            ExprNode::Not(inner) => inner,
            ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l + r,
        })
    }

    /// Minimize this expression
    ///
    /// Runs the full pipeline: truth table, Quine-McCluskey prime implicant
    /// generation, Petrick cover selection, conversion back to a tree, and the
    /// XOR-recognition rewrite. The result has the lowest literal count among
    /// the minimal sum-of-products covers of the function.
    ///
    /// A contradiction minimizes to `0` and a tautology to `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("(!a & b) | (a & !b)")?;
    /// assert_eq!(expr.simplify()?.to_string(), "a ^ b");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn simplify(&self) -> Result<BoolExpr, MinimizeError> {
        minimize::simplify(self).map(|(expr, _)| expr)
    }

    /// Minimize this expression and return the diagnostic record
    ///
    /// Same pipeline as [`simplify`](Self::simplify), additionally returning
    /// the [`Diagnostics`] record: the Quine-McCluskey trace, the full prime
    /// implicant list, every minimal cover Petrick's method found, and the
    /// selected cover.
    pub fn simplify_with_diagnostics(&self) -> Result<(BoolExpr, Diagnostics), MinimizeError> {
        minimize::simplify(self)
    }

    /// Get a reference to the inner expression (internal use)
    pub(crate) fn inner(&self) -> &BoolExprInner {
        &self.inner
    }
}
