//! Global combiner (spec §4.6): picks one candidate sweep path per
//! partition and an ordering that minimizes total cost (candidate costs
//! plus inter-partition connector lengths), via a turn-penalty adjustment
//! pass followed by a Held-Karp-style bitmask dynamic program.

use std::collections::HashMap;

use crate::types::{euclidean, CandidateOption};

/// Among same-partition candidates within `tol` of each other's cost, add
/// `penalty` for each turn beyond the minimum. Breaks cost ties in favor
/// of fewer turns without ever preferring a strictly more expensive path.
fn adjust_candidate_options(
    per_partition: &[Vec<CandidateOption>],
    penalty: f64,
    tol: f64,
) -> Vec<Vec<CandidateOption>> {
    per_partition
        .iter()
        .map(|partition| {
            partition
                .iter()
                .map(|cand| {
                    let min_turns = partition
                        .iter()
                        .filter(|c| (c.cost - cand.cost).abs() < tol)
                        .map(|c| c.turns)
                        .min()
                        .unwrap_or(cand.turns);
                    let extra = penalty * cand.turns.saturating_sub(min_turns) as f64;
                    CandidateOption {
                        cost: cand.cost + extra,
                        ..cand.clone()
                    }
                })
                .collect()
        })
        .collect()
}

/// `(partition_index, candidate_index)` for each tour stop, in order.
pub type Assignment = Vec<(usize, usize)>;

struct Solver<'a> {
    candidates: &'a [Vec<CandidateOption>],
    n: usize,
    memo: HashMap<(u32, usize, usize), (f64, Assignment)>,
}

impl<'a> Solver<'a> {
    fn dp(&mut self, mask: u32, last_part: usize, last_cand: usize) -> (f64, Assignment) {
        let full = (1u32 << self.n) - 1;
        if mask == full {
            return (0.0, vec![]);
        }
        if let Some(cached) = self.memo.get(&(mask, last_part, last_cand)) {
            return cached.clone();
        }

        let prev_exit = self.candidates[last_part][last_cand].exit;

        let mut best_cost = f64::INFINITY;
        let mut best_path: Assignment = vec![];
        for j in 0..self.n {
            if (mask >> j) & 1 == 1 {
                continue;
            }
            for (cand_idx, cand) in self.candidates[j].iter().enumerate() {
                let conn = euclidean(prev_exit, cand.entry);
                let new_mask = mask | (1 << j);
                let (sub_cost, sub_path) = self.dp(new_mask, j, cand_idx);
                let total = conn + cand.cost + sub_cost;
                if total < best_cost {
                    best_cost = total;
                    let mut path = vec![(j, cand_idx)];
                    path.extend(sub_path);
                    best_path = path;
                }
            }
        }

        self.memo
            .insert((mask, last_part, last_cand), (best_cost, best_path.clone()));
        (best_cost, best_path)
    }
}

/// Choose a visiting order and one candidate per partition minimizing
/// total cost. `per_partition[i]` must be non-empty for every `i` that
/// should participate (empty partitions are expected to already have been
/// filtered out by the caller, per spec §7).
pub fn held_karp(per_partition: &[Vec<CandidateOption>]) -> (f64, Assignment) {
    let n = per_partition.len();
    if n == 0 {
        return (0.0, vec![]);
    }

    let adjusted = adjust_candidate_options(per_partition, 1.0, 1e-7);

    let mut solver = Solver {
        candidates: &adjusted,
        n,
        memo: HashMap::new(),
    };

    let mut overall_best = f64::INFINITY;
    let mut overall_path: Assignment = vec![];
    for i in 0..n {
        for (cand_idx, cand) in adjusted[i].iter().enumerate() {
            let init_mask = 1u32 << i;
            let (cost_rest, path_rest) = solver.dp(init_mask, i, cand_idx);
            let total = cand.cost + cost_rest;
            if total < overall_best {
                overall_best = total;
                let mut path = vec![(i, cand_idx)];
                path.extend(path_rest);
                overall_path = path;
            }
        }
    }

    (overall_best, overall_path)
}
