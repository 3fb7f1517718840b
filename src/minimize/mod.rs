//! The minimization pipeline
//!
//! One [`simplify`] call runs, in order: canonical variable list, truth
//! table, minterm collection, Quine-McCluskey prime implicant generation,
//! coverage table, Petrick cover enumeration, literal-count cover selection,
//! conversion back to an expression tree, and the XOR-recognition rewrite.
//! Every stage allocates fresh containers and hands them to the next; the
//! [`Diagnostics`] record is the only artifact that survives the call
//! besides the minimized tree.
//!
//! The individual stages ([`prime_implicants`], [`coverage_table`],
//! [`petrick`], [`cover_to_expr`]) are exposed for callers that want to
//! inspect or drive parts of the pipeline themselves.

mod coverage;
mod error;
mod implicant;
mod petrick;
mod qmc;
mod trace;


pub use coverage::coverage_table;
pub use error::MinimizeError;
pub use implicant::{Implicant, Tri};
pub use petrick::petrick;
pub use qmc::prime_implicants;
pub use trace::{MergeRecord, TraceStep, TraceStepKind};

use crate::expression::BoolExpr;
use crate::rewrite::rewrite;
use crate::table::TruthTable;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Everything the pipeline learned while minimizing one expression
///
/// `covers` lists every minimal cover Petrick's method found;
/// `selected_cover` is the one with the lowest total literal count (ties
/// broken by the sets' natural order). For a contradiction all collections
/// are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Canonical variable order the implicants are laid out over
    pub variables: Vec<Arc<str>>,
    /// Indices of the true rows of the truth table
    pub minterms: Vec<usize>,
    /// Per-pass Quine-McCluskey records
    pub trace: Vec<TraceStep>,
    /// Every prime implicant of the function
    pub prime_implicants: Vec<Implicant>,
    /// Every minimal cover, sorted by natural order
    pub covers: Vec<BTreeSet<Implicant>>,
    /// The cover the result tree was built from
    pub selected_cover: BTreeSet<Implicant>,
}

impl Diagnostics {
    fn empty(variables: Vec<Arc<str>>) -> Diagnostics {
        Diagnostics {
            variables,
            minterms: Vec::new(),
            trace: Vec::new(),
            prime_implicants: Vec::new(),
            covers: Vec::new(),
            selected_cover: BTreeSet::new(),
        }
    }
}

/// Run the full minimization pipeline on one expression
///
/// This is what [`BoolExpr::simplify`] and
/// [`BoolExpr::simplify_with_diagnostics`] call.
pub fn simplify(expr: &BoolExpr) -> Result<(BoolExpr, Diagnostics), MinimizeError> {
    let table = TruthTable::from_expr(expr);
    let variables = table.variables().to_vec();
    let n = variables.len();

    let minterms = table.minterms();
    if minterms.is_empty() {
        return Ok((BoolExpr::constant(false), Diagnostics::empty(variables)));
    }

    let (primes, trace) = prime_implicants(&minterms, n);
    let coverage = coverage_table(&primes, &minterms);
    let covers = petrick(&coverage);

    let selected = covers
        .iter()
        .min_by(|a, b| {
            cover_literal_count(a)
                .cmp(&cover_literal_count(b))
                .then_with(|| a.cmp(b))
        })
        .cloned()
        .ok_or(MinimizeError::NoMinimalCover)?;

    let tree = rewrite(&cover_to_expr(&selected, &variables));

    Ok((
        tree,
        Diagnostics {
            variables,
            minterms,
            trace,
            prime_implicants: primes,
            covers,
            selected_cover: selected,
        },
    ))
}

/// Total literal count of a cover, the cost the facade minimizes
pub fn cover_literal_count(cover: &BTreeSet<Implicant>) -> usize {
    cover.iter().map(Implicant::literal_count).sum()
}

/// Convert a cover back to an OR-of-ANDs expression tree
///
/// Each implicant becomes a right-leaning AND of its literals (`[x, y, z]`
/// folds to `x & (y & z)`); an implicant with no concrete position becomes
/// `1`. Terms are ordered by their variable lists (ties by the implicants'
/// natural order) and joined by a left-leaning OR fold, making the output
/// independent of hash iteration order.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::cover_to_expr;
/// use qmc_logic::Implicant;
/// use std::collections::BTreeSet;
/// use std::sync::Arc;
///
/// let cover = BTreeSet::from([Implicant::from_pattern("1-0")]);
/// let vars: Vec<Arc<str>> = vec![Arc::from("a"), Arc::from("b"), Arc::from("c")];
/// assert_eq!(cover_to_expr(&cover, &vars).to_string(), "a & !c");
/// ```
pub fn cover_to_expr(cover: &BTreeSet<Implicant>, variables: &[Arc<str>]) -> BoolExpr {
    let mut terms: Vec<&Implicant> = cover.iter().collect();
    terms.sort_by(|a, b| {
        term_variables(a, variables)
            .cmp(&term_variables(b, variables))
            .then_with(|| a.cmp(b))
    });

    terms
        .into_iter()
        .map(|implicant| implicant_to_expr(implicant, variables))
        .reduce(|acc, term| acc.or(&term))
        .unwrap_or_else(|| BoolExpr::constant(false))
}

/// The variable names an implicant's term mentions, in canonical order
fn term_variables(implicant: &Implicant, variables: &[Arc<str>]) -> Vec<Arc<str>> {
    implicant
        .positions()
        .iter()
        .zip(variables)
        .filter(|(t, _)| **t != Tri::DontCare)
        .map(|(_, name)| Arc::clone(name))
        .collect()
}

fn implicant_to_expr(implicant: &Implicant, variables: &[Arc<str>]) -> BoolExpr {
    let literals: Vec<BoolExpr> = implicant
        .positions()
        .iter()
        .zip(variables)
        .filter_map(|(t, name)| match t {
            Tri::True => Some(BoolExpr::variable(name)),
            Tri::False => Some(BoolExpr::variable(name).not()),
            Tri::DontCare => None,
        })
        .collect();

    literals
        .into_iter()
        .rev()
        .reduce(|acc, literal| literal.and(&acc))
        .unwrap_or_else(|| BoolExpr::constant(true))
}
