//! Truth tables
//!
//! A [`TruthTable`] enumerates every assignment over an expression's
//! variables in ascending minterm order and records the expression's value on
//! each row. The minterm indices of the true rows are what the
//! Quine-McCluskey engine consumes.

use crate::expression::BoolExpr;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One row of a truth table
///
/// `inputs[k]` is the value of the k-th variable of the canonical variable
/// list; `index` is the minterm index encoding those values MSB-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTableRow {
    pub index: usize,
    pub inputs: Vec<bool>,
    pub output: bool,
}

/// The complete truth table of a boolean expression
///
/// Rows are in strict ascending order of minterm index, `0..2^n`. Bit layout
/// is MSB-first: for row index `i`, the k-th variable holds
/// `(i >> (n - 1 - k)) & 1`. An expression with no variables gets a single
/// row with empty inputs.
///
/// # Examples
///
/// ```
/// use qmc_logic::{BoolExpr, TruthTable};
///
/// let expr = BoolExpr::parse("a & b")?;
/// let table = TruthTable::from_expr(&expr);
///
/// assert_eq!(table.rows().len(), 4);
/// assert_eq!(table.minterms(), [3]); // only a=1, b=1
/// # Ok::<(), qmc_logic::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Build the truth table of an expression
    pub fn from_expr(expr: &BoolExpr) -> TruthTable {
        let variables = expr.variables();
        let n = variables.len();

        let mut rows = Vec::with_capacity(1 << n);
        let mut assignment: HashMap<Arc<str>, bool> = HashMap::with_capacity(n);
        for index in 0..(1usize << n) {
            let mut inputs = Vec::with_capacity(n);
            for (k, name) in variables.iter().enumerate() {
                let bit = (index >> (n - 1 - k)) & 1 == 1;
                assignment.insert(Arc::clone(name), bit);
                inputs.push(bit);
            }
            let output = expr
                .evaluate(&assignment)
                .expect("enumerated assignment binds every variable of the expression");
            rows.push(TruthTableRow {
                index,
                inputs,
                output,
            });
        }

        TruthTable { variables, rows }
    }

    /// The canonical variable list the rows are laid out over
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// All rows in ascending minterm order
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Indices of the rows where the expression is true
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.output)
            .map(|row| row.index)
            .collect()
    }
}

/// Render the table in the usual grid form, one column per variable plus a
/// result column.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|v| v.len()).collect();

        for (name, &width) in self.variables.iter().zip(&widths) {
            write!(f, "{:>width$} ", name, width = width)?;
        }
        writeln!(f, "| f")?;

        for &width in &widths {
            write!(f, "{:-<width$}-", "", width = width)?;
        }
        writeln!(f, "+--")?;

        for row in &self.rows {
            for (bit, &width) in row.inputs.iter().zip(&widths) {
                write!(f, "{:>width$} ", u8::from(*bit), width = width)?;
            }
            writeln!(f, "| {}", u8::from(row.output))?;
        }
        Ok(())
    }
}
