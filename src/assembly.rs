//! Path assembly (spec §4.7): stitches the Held-Karp tour's per-partition
//! candidate paths into one global path, skipping a duplicated joining
//! waypoint where consecutive candidates meet exactly, and records the
//! inter-partition connector segments for diagnostics.

use crate::combiner::Assignment;
use crate::types::{CandidateOption, Point};

pub struct AssembledPath {
    pub global_path: Vec<Point>,
    pub global_connectors: Vec<(Point, Point)>,
}

/// Walk the chosen `(partition, candidate)` tour in order, concatenating
/// each candidate's waypoints onto the running global path.
pub fn assemble(per_partition: &[Vec<CandidateOption>], tour: &Assignment) -> AssembledPath {
    let mut global_path: Vec<Point> = Vec::new();
    let mut global_connectors: Vec<(Point, Point)> = Vec::new();

    for (idx, &(part_idx, cand_idx)) in tour.iter().enumerate() {
        let candidate = &per_partition[part_idx][cand_idx];

        if idx == 0 {
            global_path.extend(candidate.path.iter().copied());
        } else {
            let joins = global_path
                .last()
                .is_some_and(|&last| points_equal(last, candidate.path[0]));
            if joins {
                global_path.extend(candidate.path.iter().skip(1).copied());
            } else {
                global_path.extend(candidate.path.iter().copied());
            }

            let (prev_part, prev_cand) = tour[idx - 1];
            let prev = &per_partition[prev_part][prev_cand];
            global_connectors.push((prev.exit, candidate.entry));
        }
    }

    AssembledPath { global_path, global_connectors }
}

fn points_equal(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(entry: Point, exit: Point, path: Vec<Point>) -> CandidateOption {
        CandidateOption { entry, exit, cost: 0.0, turns: 0, path }
    }

    #[test]
    fn single_partition_path_is_unchanged() {
        let path = vec![Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 0.0 }];
        let c = cand(path[0], path[1], path.clone());
        let assembled = assemble(&[vec![c]], &[(0, 0)]);
        assert_eq!(assembled.global_path, path);
        assert!(assembled.global_connectors.is_empty());
    }

    #[test]
    fn shared_joining_waypoint_is_deduplicated() {
        let a = cand(
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            vec![Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 0.0 }],
        );
        let b = cand(
            Point { x: 1.0, y: 0.0 },
            Point { x: 2.0, y: 0.0 },
            vec![Point { x: 1.0, y: 0.0 }, Point { x: 2.0, y: 0.0 }],
        );
        let assembled = assemble(&[vec![a], vec![b]], &[(0, 0), (1, 0)]);
        assert_eq!(
            assembled.global_path,
            vec![Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 0.0 }, Point { x: 2.0, y: 0.0 }]
        );
        assert_eq!(assembled.global_connectors, vec![(Point { x: 1.0, y: 0.0 }, Point { x: 1.0, y: 0.0 })]);
    }

    #[test]
    fn disjoint_partitions_get_an_explicit_connector() {
        let a = cand(
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            vec![Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 0.0 }],
        );
        let b = cand(
            Point { x: 10.0, y: 0.0 },
            Point { x: 11.0, y: 0.0 },
            vec![Point { x: 10.0, y: 0.0 }, Point { x: 11.0, y: 0.0 }],
        );
        let assembled = assemble(&[vec![a], vec![b]], &[(0, 0), (1, 0)]);
        assert_eq!(assembled.global_path.len(), 4);
        assert_eq!(
            assembled.global_connectors,
            vec![(Point { x: 1.0, y: 0.0 }, Point { x: 10.0, y: 0.0 })]
        );
    }
}
