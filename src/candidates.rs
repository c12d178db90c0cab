//! Per-partition candidate generator (spec §4.5): up to eight
//! boustrophedon sweep paths per partition (two axes x four corner
//! starts), costed by path length with a turn penalty applied later by
//! the combiner.

use std::collections::BTreeMap;

use geo::Polygon;

use crate::trouble;
use crate::types::{CandidateOption, Point, Tol};

/// Stateless sweep-path construction, mirroring `ParallelTrackSweepCartesian`
/// in the shape of the teacher's small, purely-functional domain structs
/// (`Objective`, `WeightMatrix`).
pub struct CandidateGenerator;

impl CandidateGenerator {
    /// Median of positive consecutive differences of `waypoints`' `bin_axis`
    /// coordinate, once sorted; `0.0` if no positive difference exists
    /// (all waypoints share that coordinate).
    fn compute_spacing(waypoints: &[Point], bin_axis: usize) -> f64 {
        let mut coords: Vec<f64> = waypoints.iter().map(|p| component(*p, bin_axis)).collect();
        coords.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut diffs: Vec<f64> = coords
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|&d| d > 1e-6)
            .collect();

        if diffs.is_empty() {
            return 0.0;
        }
        diffs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        median(&diffs)
    }

    fn group_into_lanes(waypoints: &[Point], bin_axis: usize, spacing: f64) -> BTreeMap<i64, Vec<Point>> {
        let mut lanes: BTreeMap<i64, Vec<Point>> = BTreeMap::new();
        if waypoints.is_empty() {
            return lanes;
        }
        if spacing == 0.0 {
            lanes.insert(0, waypoints.to_vec());
            return lanes;
        }

        let min_val = waypoints
            .iter()
            .map(|p| component(*p, bin_axis))
            .fold(f64::INFINITY, f64::min);

        for &p in waypoints {
            let key = ((component(p, bin_axis) - min_val) / spacing).round() as i64;
            lanes.entry(key).or_default().push(p);
        }
        lanes
    }

    fn compute_sweep_path(
        waypoints: &[Point],
        bin_axis: usize,
        sort_axis: usize,
        reverse_bin_order: bool,
        reverse_lane_order: bool,
    ) -> Vec<Point> {
        let spacing = Self::compute_spacing(waypoints, bin_axis);
        let lanes = Self::group_into_lanes(waypoints, bin_axis, spacing);

        let mut keys: Vec<i64> = lanes.keys().copied().collect();
        if reverse_bin_order {
            keys.reverse();
        }

        let mut path = Vec::with_capacity(waypoints.len());
        for (i, key) in keys.into_iter().enumerate() {
            let mut lane = lanes[&key].clone();
            let ascend = ((i % 2 == 0) && !reverse_lane_order) || ((i % 2 == 1) && reverse_lane_order);
            lane.sort_by(|a, b| {
                let (ca, cb) = (component(*a, sort_axis), component(*b, sort_axis));
                if ascend {
                    ca.partial_cmp(&cb).unwrap()
                } else {
                    cb.partial_cmp(&ca).unwrap()
                }
            });
            path.extend(lane);
        }
        path
    }

    /// The four corner-start variants for one sweep direction.
    fn corner_variants(waypoints: &[Point], bin_axis: usize, sort_axis: usize) -> Vec<Vec<Point>> {
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(rb, rl)| Self::compute_sweep_path(waypoints, bin_axis, sort_axis, rb, rl))
            .collect()
    }

    /// Build every eligible candidate for a partition's assigned
    /// waypoints. `polygon` is optional; axis eligibility defaults to both
    /// axes when it is absent (spec §4.5).
    pub fn get_candidate_options(waypoints: &[Point], polygon: Option<&Polygon<f64>>, tol: Tol) -> Vec<CandidateOption> {
        let (horizontal_ok, vertical_ok) = match polygon {
            Some(p) => {
                let (h_trouble, v_trouble) = trouble::is_troublesome(p, tol);
                (!h_trouble, !v_trouble)
            }
            None => (true, true),
        };

        let mut paths: Vec<Vec<Point>> = Vec::new();
        // Preserved exactly as specified (§9 Open Questions): the
        // horizontal branch also fires when both axes are troublesome
        // (fallback), equivalent to `horizontal_ok || !vertical_ok`.
        if horizontal_ok || !vertical_ok {
            paths.extend(Self::corner_variants(waypoints, 0, 1));
        }
        if vertical_ok || !horizontal_ok {
            paths.extend(Self::corner_variants(waypoints, 1, 0));
        }

        paths
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(CandidateOption::from_path)
            .collect()
    }
}

fn component(p: Point, axis: usize) -> f64 {
    if axis == 0 {
        p.x
    } else {
        p.y
    }
}

fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: i64, cols: i64) -> Vec<Point> {
        let mut pts = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                pts.push(Point { x: c as f64 + 0.5, y: r as f64 + 0.5 });
            }
        }
        pts
    }

    #[test]
    fn single_cell_candidate_is_zero_cost_zero_turns() {
        let tol = Tol::new(1.0).unwrap();
        let waypoints = vec![Point { x: 0.5, y: 0.5 }];
        let opts = CandidateGenerator::get_candidate_options(&waypoints, None, tol);
        assert!(!opts.is_empty());
        for c in &opts {
            assert_eq!(c.cost, 0.0);
            assert_eq!(c.turns, 0);
        }
    }

    #[test]
    fn no_polygon_generates_both_axes() {
        let tol = Tol::new(1.0).unwrap();
        let waypoints = grid(4, 10);
        let opts = CandidateGenerator::get_candidate_options(&waypoints, None, tol);
        assert_eq!(opts.len(), 8);
    }

    #[test]
    fn rectangle_ten_by_four_best_cost_is_thirty_nine() {
        // spec §8 scenario S1
        let tol = Tol::new(1.0).unwrap();
        let waypoints = grid(4, 10);
        let opts = CandidateGenerator::get_candidate_options(&waypoints, None, tol);
        let best = opts.iter().map(|c| c.cost).fold(f64::INFINITY, f64::min);
        assert!((best - 39.0).abs() < 1e-9);
    }
}
