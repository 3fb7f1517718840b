//! Implicants: ternary vectors over the variable positions

use serde::{Serialize, Serializer};
use std::fmt;

/// A variable position in an implicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tri {
    /// This variable must be false.
    False,
    /// This variable must be true.
    True,
    /// This variable may be true or false.
    DontCare,
}

/// A product term over the canonical variable list
///
/// One [`Tri`] per variable: a concrete implicant (no don't-cares) denotes a
/// single minterm; each don't-care position doubles the set of minterms the
/// implicant covers. The natural (derived) ordering compares positions
/// left-to-right with `False < True < DontCare`; cover selection uses it as
/// the deterministic tie-break.
///
/// # Examples
///
/// ```
/// use qmc_logic::Implicant;
///
/// let imp = Implicant::from_pattern("10-");
/// assert!(imp.covers(4)); // 1,0,0
/// assert!(imp.covers(5)); // 1,0,1
/// assert!(!imp.covers(6));
/// assert_eq!(imp.literal_count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant(Vec<Tri>);

impl Implicant {
    /// The concrete implicant of a single minterm, MSB-first
    pub fn from_minterm(minterm: usize, n: usize) -> Implicant {
        Implicant(
            (0..n)
                .map(|k| {
                    if (minterm >> (n - 1 - k)) & 1 == 1 {
                        Tri::True
                    } else {
                        Tri::False
                    }
                })
                .collect(),
        )
    }

    /// Build an implicant from a pattern of `1`, `0` and `-`
    ///
    /// Mostly useful in tests and examples. Characters other than `1`, `0`
    /// and `-` are rejected.
    ///
    /// # Panics
    ///
    /// Panics on characters outside `{0, 1, -}`.
    pub fn from_pattern(pattern: &str) -> Implicant {
        Implicant(
            pattern
                .chars()
                .map(|c| match c {
                    '0' => Tri::False,
                    '1' => Tri::True,
                    '-' => Tri::DontCare,
                    _ => panic!("invalid implicant pattern character {:?}", c),
                })
                .collect(),
        )
    }

    /// The per-variable positions
    pub fn positions(&self) -> &[Tri] {
        &self.0
    }

    /// Number of variable positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-variable implicant
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of concrete `True` positions; the Quine-McCluskey grouping key
    pub fn true_count(&self) -> u32 {
        self.0.iter().filter(|&&t| t == Tri::True).count() as u32
    }

    /// Count of concrete positions; the cost of the implicant in literals
    pub fn literal_count(&self) -> usize {
        self.0.iter().filter(|&&t| t != Tri::DontCare).count()
    }

    /// Whether this implicant covers the given minterm
    ///
    /// Position-wise: a concrete position must agree with the minterm's bit,
    /// a don't-care agrees with both.
    pub fn covers(&self, minterm: usize) -> bool {
        let n = self.0.len();
        self.0.iter().enumerate().all(|(k, t)| match t {
            Tri::DontCare => true,
            Tri::True => (minterm >> (n - 1 - k)) & 1 == 1,
            Tri::False => (minterm >> (n - 1 - k)) & 1 == 0,
        })
    }

    /// Every minterm this implicant covers, ascending
    pub fn covered_minterms(&self) -> Vec<usize> {
        (0..(1usize << self.0.len()))
            .filter(|&m| self.covers(m))
            .collect()
    }

    /// Attempt the Quine-McCluskey adjacency merge
    ///
    /// Two implicants combine iff they agree everywhere except exactly one
    /// position holding opposite concrete values; that position becomes a
    /// don't-care. A don't-care facing a concrete value blocks the merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Implicant;
    ///
    /// let a = Implicant::from_pattern("10-");
    /// let b = Implicant::from_pattern("11-");
    /// assert_eq!(a.combine(&b), Some(Implicant::from_pattern("1--")));
    ///
    /// let c = Implicant::from_pattern("1-0");
    /// assert_eq!(a.combine(&c), None); // don't-cares misaligned
    /// ```
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.0.len() != other.0.len() {
            return None;
        }
        let mut differing = None;
        for (i, (a, b)) in self.0.iter().zip(&other.0).enumerate() {
            if a == b {
                continue;
            }
            match (a, b) {
                (Tri::True, Tri::False) | (Tri::False, Tri::True) if differing.is_none() => {
                    differing = Some(i);
                }
                _ => return None,
            }
        }
        let i = differing?;
        let mut positions = self.0.clone();
        positions[i] = Tri::DontCare;
        Some(Implicant(positions))
    }
}

/// Renders as a pattern string: `1`, `0`, `-` per position
impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.0 {
            f.write_str(match t {
                Tri::False => "0",
                Tri::True => "1",
                Tri::DontCare => "-",
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Serializes as the pattern string, e.g. `"10-"`
impl Serialize for Implicant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minterm_msb_first() {
        assert_eq!(Implicant::from_minterm(4, 3), Implicant::from_pattern("100"));
        assert_eq!(Implicant::from_minterm(3, 3), Implicant::from_pattern("011"));
        assert_eq!(Implicant::from_minterm(0, 0), Implicant::from_pattern(""));
    }

    #[test]
    fn test_counts() {
        let imp = Implicant::from_pattern("1-01");
        assert_eq!(imp.true_count(), 2);
        assert_eq!(imp.literal_count(), 3);
    }

    #[test]
    fn test_covers() {
        let imp = Implicant::from_pattern("-1-");
        assert_eq!(imp.covered_minterms(), [2, 3, 6, 7]);
    }

    #[test]
    fn test_empty_implicant_covers_everything() {
        let imp = Implicant::from_pattern("");
        assert!(imp.covers(0));
        assert_eq!(imp.literal_count(), 0);
    }

    #[test]
    fn test_combine_single_difference() {
        let a = Implicant::from_pattern("110");
        let b = Implicant::from_pattern("111");
        assert_eq!(a.combine(&b), Some(Implicant::from_pattern("11-")));
        assert_eq!(b.combine(&a), Some(Implicant::from_pattern("11-")));
    }

    #[test]
    fn test_combine_rejects_two_differences() {
        let a = Implicant::from_pattern("110");
        let b = Implicant::from_pattern("101");
        assert_eq!(a.combine(&b), None);
    }

    #[test]
    fn test_combine_rejects_misaligned_dont_cares() {
        let a = Implicant::from_pattern("1-0");
        let b = Implicant::from_pattern("100");
        assert_eq!(a.combine(&b), None);

        // aligned don't-cares are fine
        let c = Implicant::from_pattern("1-1");
        assert_eq!(a.combine(&c), Some(Implicant::from_pattern("1--")));
    }

    #[test]
    fn test_merge_covers_union() {
        let a = Implicant::from_pattern("10-");
        let b = Implicant::from_pattern("11-");
        let merged = a.combine(&b).unwrap();

        let mut union = a.covered_minterms();
        union.extend(b.covered_minterms());
        union.sort_unstable();
        assert_eq!(merged.covered_minterms(), union);
    }

    #[test]
    fn test_natural_order() {
        // False < True < DontCare, positions left-to-right
        assert!(Implicant::from_pattern("01") < Implicant::from_pattern("10"));
        assert!(Implicant::from_pattern("10") < Implicant::from_pattern("1-"));
    }
}
