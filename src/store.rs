//! Polygon store (spec §4.8, added): a small pluggable source of named
//! input polygons, in the shape of the teacher's pluggable data-source
//! traits (`PackSource`). Ships an in-memory store seeded with the five
//! scenario polygons from the specification (S1-S5) so the CLI and the
//! integration tests have concrete input without external data files.

use geo::{Coord, LineString, Polygon};

use crate::error::{CppError, Result};

pub trait PolygonStore {
    fn get(&self, name: &str) -> Result<Polygon<f64>>;
    fn list_names(&self) -> Vec<String>;
}

pub struct InMemoryPolygonStore {
    entries: Vec<(String, Polygon<f64>)>,
}

impl InMemoryPolygonStore {
    /// The store's fixed S1-S5 scenario set.
    pub fn with_scenarios() -> Self {
        Self {
            entries: vec![
                ("S1".to_string(), scenario_rectangle()),
                ("S2".to_string(), scenario_u_shape()),
                ("S3".to_string(), scenario_cross()),
                ("S4".to_string(), scenario_rectangle_with_hole()),
                ("S5".to_string(), scenario_two_squares_merged()),
            ],
        }
    }
}

impl Default for InMemoryPolygonStore {
    fn default() -> Self {
        Self::with_scenarios()
    }
}

impl PolygonStore for InMemoryPolygonStore {
    fn get(&self, name: &str) -> Result<Polygon<f64>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.clone())
            .ok_or_else(|| CppError::InvalidInput(format!("no such polygon: {name}")))
    }

    fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }
}

fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
    let mut pts: Vec<Coord<f64>> = coords.iter().map(|&(x, y)| Coord { x, y }).collect();
    if pts.first() != pts.last() {
        pts.push(pts[0]);
    }
    LineString(pts)
}

fn scenario_rectangle() -> Polygon<f64> {
    Polygon::new(ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (0.0, 4.0)]), vec![])
}

fn scenario_u_shape() -> Polygon<f64> {
    Polygon::new(
        ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (6.0, 10.0),
            (6.0, 4.0),
            (4.0, 4.0),
            (4.0, 10.0),
            (0.0, 10.0),
        ]),
        vec![],
    )
}

fn scenario_cross() -> Polygon<f64> {
    Polygon::new(
        ring(&[
            (-2.0, -6.0),
            (2.0, -6.0),
            (2.0, -2.0),
            (6.0, -2.0),
            (6.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (-2.0, 6.0),
            (-2.0, 2.0),
            (-6.0, 2.0),
            (-6.0, -2.0),
            (-2.0, -2.0),
        ]),
        vec![],
    )
}

fn scenario_rectangle_with_hole() -> Polygon<f64> {
    Polygon::new(
        ring(&[(0.0, 0.0), (12.0, 0.0), (12.0, 8.0), (0.0, 8.0)]),
        vec![ring(&[(4.0, 2.0), (8.0, 2.0), (8.0, 6.0), (4.0, 6.0)])],
    )
}

/// The "S5" store entry: the two 3x3 squares below, merged into their
/// single convex union. A plain full-`run_pipeline` smoke test (one
/// partition; any union of two adjacent axis-aligned rectangles is always
/// monotone in at least one axis, so `merge_partitions` would immediately
/// re-merge them anyway). The documented "two partitions, Held-Karp orders
/// them by closest connector" scenario (spec §8 S5) is instead exercised
/// directly against [`two_adjacent_squares`], downstream of decomposition.
fn scenario_two_squares_merged() -> Polygon<f64> {
    Polygon::new(ring(&[(0.0, 0.0), (6.0, 0.0), (6.0, 3.0), (0.0, 3.0)]), vec![])
}

/// Two 3x3 squares sharing the full edge at `x = 3`, kept as two separate
/// partitions rather than run through `merge_partitions` (which would
/// always recombine them; see [`scenario_two_squares_merged`]).
pub(crate) fn two_adjacent_squares() -> (Polygon<f64>, Polygon<f64>) {
    (
        Polygon::new(ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]), vec![]),
        Polygon::new(ring(&[(3.0, 0.0), (6.0, 0.0), (6.0, 3.0), (3.0, 3.0)]), vec![]),
    )
}
