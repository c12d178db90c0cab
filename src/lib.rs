#![doc = "Coverage path planning for rectilinear polygons: decompose, merge, rasterize, and sweep"]

mod assembly;
mod candidates;
pub mod cli;
mod combiner;
mod diagnostics;
mod error;
mod geomkernel;
mod partition;
mod pipeline;
mod raster;
mod store;
mod trouble;
mod types;

#[doc(inline)]
pub use cli::Cli;

#[doc(inline)]
pub use error::{CppError, Result};

#[doc(inline)]
pub use types::{CandidateOption, CellId, Point, Tol};

#[doc(inline)]
pub use diagnostics::{Diagnostics, PassOutcome, PassRecord};

#[doc(inline)]
pub use store::{InMemoryPolygonStore, PolygonStore};

#[doc(inline)]
pub use pipeline::{run_pipeline, PipelineOptions, PipelineOutput};

#[doc(inline)]
pub use geomkernel::Axis;

#[doc(inline)]
pub use trouble::{is_troublesome, quantify_gaps, GapDetails, GapMetrics, RingSource};

#[doc(inline)]
pub use partition::{greedy_partition, merge_partitions};
