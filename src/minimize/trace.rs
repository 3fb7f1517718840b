//! Per-pass trace records emitted by the Quine-McCluskey engine
//!
//! The trace is append-only and reproducible: group keys are visited in
//! ascending order, so two runs over the same minterms produce identical
//! records.

use super::implicant::Implicant;
use serde::Serialize;

/// What a trace step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepKind {
    /// The initial partition of the minterms into popcount groups
    Grouping,
    /// One adjacency-merge pass over the current generation
    MergePass,
}

/// The merge attempts between one pair of adjacent groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRecord {
    /// The lower group key
    pub group: u32,
    /// The upper group key (`group + 1`)
    pub next_group: u32,
    /// Combined implicants this pair produced (in discovery order)
    pub merged: Vec<Implicant>,
    /// Implicants of the lower group that combined with nothing in the upper
    pub unmerged: Vec<Implicant>,
}

/// One step of the Quine-McCluskey run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub kind: TraceStepKind,
    /// The generation the pass started from, keyed by popcount
    pub groups_before: Vec<(u32, Vec<Implicant>)>,
    /// The next generation the pass produced
    pub groups_after: Vec<(u32, Vec<Implicant>)>,
    /// Merge details per adjacent group pair
    pub merges: Vec<MergeRecord>,
    /// Implicants of this generation not used in any merge; they are carried
    /// out of the passes as prime implicant candidates
    pub unmerged_carried: Vec<Implicant>,
}
