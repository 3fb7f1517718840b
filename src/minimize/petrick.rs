//! Petrick's method: enumerate all minimal covers
//!
//! The coverage table reads as a product of sums, one factor per minterm.
//! Distributing the product yields every way to cover all minterms; pruning
//! dominated partial products after every factor keeps the intermediate list
//! from exploding.

use super::implicant::Implicant;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Expand the coverage table into the list of minimal covers
///
/// Each returned set covers every minterm of the table and contains no
/// proper subset that still does. The list is sorted by the sets' natural
/// order. An empty table yields an empty list, as does a table with an
/// uncoverable minterm (an empty factor annihilates the product).
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::{coverage_table, petrick};
/// use qmc_logic::Implicant;
///
/// let primes = [Implicant::from_pattern("0-"), Implicant::from_pattern("-0")];
/// let covers = petrick(&coverage_table(&primes, &[0, 1, 2]));
///
/// // Both primes are needed: minterm 1 forces the first, minterm 2 the second.
/// assert_eq!(covers.len(), 1);
/// assert_eq!(covers[0].len(), 2);
/// ```
pub fn petrick(coverage: &BTreeMap<usize, Vec<Implicant>>) -> Vec<BTreeSet<Implicant>> {
    let mut products: Vec<BTreeSet<Implicant>> = Vec::new();

    for (i, factor) in coverage.values().enumerate() {
        if factor.is_empty() {
            return Vec::new();
        }
        if i == 0 {
            products = factor
                .iter()
                .map(|prime| BTreeSet::from([prime.clone()]))
                .collect();
            continue;
        }

        let mut expanded: Vec<BTreeSet<Implicant>> = Vec::new();
        let mut seen: HashSet<BTreeSet<Implicant>> = HashSet::new();
        for product in &products {
            for prime in factor {
                let mut union = product.clone();
                union.insert(prime.clone());
                if seen.insert(union.clone()) {
                    expanded.push(union);
                }
            }
        }
        products = prune_supersets(expanded);
    }

    products.sort();
    products
}

/// Drop every product that strictly contains another product
fn prune_supersets(mut products: Vec<BTreeSet<Implicant>>) -> Vec<BTreeSet<Implicant>> {
    // Smaller sets first, so a kept set can only be a subset of a candidate.
    products.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut kept: Vec<BTreeSet<Implicant>> = Vec::new();
    'candidates: for candidate in products {
        for smaller in &kept {
            if smaller.is_subset(&candidate) {
                continue 'candidates;
            }
        }
        kept.push(candidate);
    }
    kept
}
