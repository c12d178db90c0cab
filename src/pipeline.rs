//! Pipeline entry point (spec §4.9): wires the geometry kernel, trouble
//! analyzer, partitioner, merger, rasterizer, candidate generator, global
//! combiner, and path assembler into one call, in the shape of the
//! original implementation's `run_pipeline`.

use geo::Polygon;

use crate::assembly::{self, AssembledPath};
use crate::candidates::CandidateGenerator;
use crate::combiner;
use crate::diagnostics::Diagnostics;
use crate::error::{CppError, Result};
use crate::partition::{greedy_partition, merge_partitions};
use crate::raster;
use crate::types::{CandidateOption, Point, Tol};

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub cell_size: f64,
    pub tolerance: f64,
    pub max_depth: u32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { cell_size: 1.0, tolerance: 1.0, max_depth: 40 }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub global_path: Vec<Point>,
    pub best_cost: f64,
    pub diagnostics: Diagnostics,
}

/// Run the full coverage path planning pipeline on `polygon`.
pub fn run_pipeline(polygon: &Polygon<f64>, options: PipelineOptions) -> Result<PipelineOutput> {
    let tol = Tol::new(options.tolerance)?;
    let cell_size = Tol::new(options.cell_size)?.get();

    if polygon.exterior().0.len() < 4 {
        return Err(CppError::InvalidInput("polygon exterior has fewer than 3 distinct vertices".to_string()));
    }

    let (partitions, partitioner_passes) = greedy_partition(polygon, options.max_depth, tol);
    let merged_partitions = merge_partitions(&partitions, tol);

    let cells = raster::rasterize(polygon, cell_size);
    let cell_assignment = raster::distribute_cells(&cells, cell_size, &merged_partitions);

    let mut warnings: Vec<String> = Vec::new();
    let non_empty: Vec<(usize, Vec<Point>)> = cell_assignment
        .iter()
        .filter_map(|(part_idx, cell_list)| {
            if cell_list.is_empty() {
                warnings.push(format!("partition {part_idx} is empty; omitted from the tour"));
                None
            } else {
                Some((*part_idx, cell_list.iter().map(|c| c.center(cell_size)).collect()))
            }
        })
        .collect();

    let candidates_per_partition = generate_candidates(&non_empty, &merged_partitions, tol);

    let mut per_partition_candidates: Vec<Vec<CandidateOption>> = Vec::new();
    for (part_idx, candidates) in non_empty.iter().map(|(i, _)| *i).zip(candidates_per_partition) {
        if candidates.is_empty() {
            warnings.push(format!("partition {part_idx} produced no candidate paths; omitted from the tour"));
            continue;
        }
        per_partition_candidates.push(candidates);
    }

    let (best_cost, tour) = combiner::held_karp(&per_partition_candidates);

    let AssembledPath { global_path, global_connectors } = assembly::assemble(&per_partition_candidates, &tour);

    let per_partition_paths: Vec<Vec<Point>> = tour
        .iter()
        .map(|&(part_idx, cand_idx)| per_partition_candidates[part_idx][cand_idx].path.clone())
        .collect();

    let diagnostics = Diagnostics {
        partitioner_passes,
        merged_partitions,
        cell_assignment,
        per_partition_candidates,
        per_partition_paths,
        global_connectors,
        warnings,
    };

    Ok(PipelineOutput { global_path, best_cost, diagnostics })
}

/// Generate each active partition's candidates. Per-partition work is
/// independent, so with the `parallel-candidates` feature this runs across
/// a rayon thread pool; results are gathered back in input order before the
/// combiner ever sees them, so the DP stays deterministic either way (spec
/// §5).
#[cfg(not(feature = "parallel-candidates"))]
fn generate_candidates(
    non_empty: &[(usize, Vec<Point>)],
    merged_partitions: &[Polygon<f64>],
    tol: Tol,
) -> Vec<Vec<CandidateOption>> {
    non_empty
        .iter()
        .map(|(part_idx, waypoints)| {
            CandidateGenerator::get_candidate_options(waypoints, Some(&merged_partitions[*part_idx]), tol)
        })
        .collect()
}

#[cfg(feature = "parallel-candidates")]
fn generate_candidates(
    non_empty: &[(usize, Vec<Point>)],
    merged_partitions: &[Polygon<f64>],
    tol: Tol,
) -> Vec<Vec<CandidateOption>> {
    use rayon::prelude::*;

    non_empty
        .par_iter()
        .map(|(part_idx, waypoints)| {
            CandidateGenerator::get_candidate_options(waypoints, Some(&merged_partitions[*part_idx]), tol)
        })
        .collect()
}
