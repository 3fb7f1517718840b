//! Quine-McCluskey prime implicant generation
//!
//! The tabular algorithm: partition the minterms into groups by popcount,
//! then repeatedly try to combine every implicant of group k with every
//! implicant of group k+1. Two implicants combine when they differ in exactly
//! one concrete position; the combination replaces that position with a
//! don't-care. Implicants never used in a combination are prime.

use super::implicant::Implicant;
use super::trace::{MergeRecord, TraceStep, TraceStepKind};
use std::collections::{BTreeMap, HashSet};

/// Compute every prime implicant of the function given by `minterms` over
/// `n` variables, along with the pass-by-pass trace.
///
/// The minterm list may contain duplicates; they are dropped. An empty list
/// yields `(vec![], vec![])`.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::prime_implicants;
/// use qmc_logic::Implicant;
///
/// let (primes, trace) = prime_implicants(&[0, 1, 2], 2);
/// assert_eq!(primes, [Implicant::from_pattern("0-"), Implicant::from_pattern("-0")]);
/// assert!(trace.len() >= 2); // grouping step plus at least one pass
/// ```
pub fn prime_implicants(minterms: &[usize], n: usize) -> (Vec<Implicant>, Vec<TraceStep>) {
    if minterms.is_empty() {
        return (Vec::new(), Vec::new());
    }

    // Initial grouping: dedup, then partition by popcount.
    let mut groups: BTreeMap<u32, Vec<Implicant>> = BTreeMap::new();
    let mut seen: HashSet<Implicant> = HashSet::new();
    for &minterm in minterms {
        let implicant = Implicant::from_minterm(minterm, n);
        if seen.insert(implicant.clone()) {
            groups.entry(implicant.true_count()).or_default().push(implicant);
        }
    }

    let mut trace = vec![TraceStep {
        kind: TraceStepKind::Grouping,
        groups_before: Vec::new(),
        groups_after: snapshot(&groups),
        merges: Vec::new(),
        unmerged_carried: Vec::new(),
    }];

    let mut primes: Vec<Implicant> = Vec::new();
    let mut prime_seen: HashSet<Implicant> = HashSet::new();

    loop {
        let mut next: BTreeMap<u32, Vec<Implicant>> = BTreeMap::new();
        let mut next_seen: HashSet<Implicant> = HashSet::new();
        let mut used: HashSet<Implicant> = HashSet::new();
        let mut merges: Vec<MergeRecord> = Vec::new();

        for (&key, bucket) in &groups {
            let Some(upper) = groups.get(&(key + 1)) else {
                continue;
            };
            let mut merged = Vec::new();
            let mut unmerged = Vec::new();
            for implicant in bucket {
                let mut combined_any = false;
                for partner in upper {
                    let Some(combination) = implicant.combine(partner) else {
                        continue;
                    };
                    combined_any = true;
                    used.insert(implicant.clone());
                    used.insert(partner.clone());
                    // The combination keeps the lower key: the flipped
                    // position loses its True, every other True survives.
                    if next_seen.insert(combination.clone()) {
                        next.entry(key).or_default().push(combination.clone());
                    }
                    merged.push(combination);
                }
                if !combined_any {
                    unmerged.push(implicant.clone());
                }
            }
            merges.push(MergeRecord {
                group: key,
                next_group: key + 1,
                merged,
                unmerged,
            });
        }

        // Anything this generation holds that no merge consumed is prime.
        let mut carried = Vec::new();
        for bucket in groups.values() {
            for implicant in bucket {
                if !used.contains(implicant) && prime_seen.insert(implicant.clone()) {
                    carried.push(implicant.clone());
                }
            }
        }
        primes.extend(carried.iter().cloned());

        let finished = next.is_empty();
        trace.push(TraceStep {
            kind: TraceStepKind::MergePass,
            groups_before: snapshot(&groups),
            groups_after: snapshot(&next),
            merges,
            unmerged_carried: carried,
        });

        if finished {
            break;
        }
        groups = next;
    }

    (primes, trace)
}

fn snapshot(groups: &BTreeMap<u32, Vec<Implicant>>) -> Vec<(u32, Vec<Implicant>)> {
    groups
        .iter()
        .map(|(&key, bucket)| (key, bucket.clone()))
        .collect()
}
