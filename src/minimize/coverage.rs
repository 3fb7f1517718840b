//! The prime implicant coverage table

use super::implicant::Implicant;
use std::collections::BTreeMap;

/// Map each minterm to the prime implicants covering it
///
/// Keys are exactly the input minterms. When `primes` comes out of
/// Quine-McCluskey over the same minterms, every value is non-empty (the
/// primes are a complete cover); the standalone function makes no such
/// guarantee.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::coverage_table;
/// use qmc_logic::Implicant;
///
/// let primes = [Implicant::from_pattern("1-0"), Implicant::from_pattern("0-1")];
/// let table = coverage_table(&primes, &[3, 4]);
///
/// assert_eq!(table[&3], [Implicant::from_pattern("0-1")]);
/// assert_eq!(table[&4], [Implicant::from_pattern("1-0")]);
/// ```
pub fn coverage_table(
    primes: &[Implicant],
    minterms: &[usize],
) -> BTreeMap<usize, Vec<Implicant>> {
    let mut table = BTreeMap::new();
    for &minterm in minterms {
        let covering: Vec<Implicant> = primes
            .iter()
            .filter(|prime| prime.covers(minterm))
            .cloned()
            .collect();
        table.insert(minterm, covering);
    }
    table
}
