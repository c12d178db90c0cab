//! Diagnostic side-channel types (spec §3 `PassRecord`, §6 "diagnostic
//! record for the optional visualizer"). None of this feeds back into the
//! pipeline's own control flow; it exists purely for callers that want to
//! inspect or visualize how a decision was reached, in the shape of the
//! original Python implementation's `passes`/`merge_log` bookkeeping.

use geo::{Polygon, Rect};

use crate::geomkernel::Axis;
use crate::trouble::GapMetrics;
use crate::types::{CandidateOption, CellId, Point};

/// Why a `greedy_partition` recursion step stopped or cut.
#[derive(Debug, Clone)]
pub enum PassOutcome {
    /// The subject was not troublesome (or the depth cap was hit): emitted
    /// unchanged.
    EmittedUnchanged,
    /// The depth cap was reached while the subject was still troublesome.
    DepthCapReached,
    /// A cut line was found and the split succeeded.
    Split,
    /// The first-choice cut line missed; the other axis' union was used
    /// instead and succeeded.
    FallbackSplit,
    /// Neither axis had an actionable gap union, or every attempted split
    /// (including the fallback) missed: emitted unchanged.
    NoActionableCut,
}

/// One recursion step of the greedy partitioner.
#[derive(Debug, Clone)]
pub struct PassRecord {
    pub depth: u32,
    pub subject_bounds: Option<Rect<f64>>,
    pub metrics: Option<GapMetrics>,
    pub cut_line: Option<(Axis, f64)>,
    pub outcome: PassOutcome,
}

/// Full side-output of `run_pipeline` (spec §6).
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub partitioner_passes: Vec<PassRecord>,
    pub merged_partitions: Vec<Polygon<f64>>,
    pub cell_assignment: Vec<(usize, Vec<CellId>)>,
    pub per_partition_candidates: Vec<Vec<CandidateOption>>,
    pub per_partition_paths: Vec<Vec<Point>>,
    pub global_connectors: Vec<(Point, Point)>,
    /// Non-fatal issues encountered along the way (an empty-candidate
    /// partition omitted from the tour, etc.) — spec §7's "the pipeline
    /// emits a warning and omits that partition".
    pub warnings: Vec<String>,
}
