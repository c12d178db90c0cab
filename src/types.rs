use crate::error::CppError;

/// A point in the plane. Re-exported alias over `geo`'s coordinate type so
/// the rest of the crate composes directly with `geo`'s algorithms.
pub type Point = geo::Coord<f64>;

/// Identifies a unit grid cell `[col*s, (col+1)*s] x [row*s, (row+1)*s]` at
/// spacing `s`. Signed so that cells can extend below the origin when the
/// input polygon does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    pub row: i64,
    pub col: i64,
}

impl CellId {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Center point of this cell at the given grid spacing.
    pub fn center(&self, cell_size: f64) -> Point {
        Point {
            x: (self.col as f64 + 0.5) * cell_size,
            y: (self.row as f64 + 0.5) * cell_size,
        }
    }

    /// Square polygon covering this cell at the given grid spacing.
    pub fn polygon(&self, cell_size: f64) -> geo::Polygon<f64> {
        let x0 = self.col as f64 * cell_size;
        let y0 = self.row as f64 * cell_size;
        let x1 = x0 + cell_size;
        let y1 = y0 + cell_size;
        geo::Polygon::new(
            geo::LineString(vec![
                Point { x: x0, y: y0 },
                Point { x: x1, y: y0 },
                Point { x: x1, y: y1 },
                Point { x: x0, y: y1 },
                Point { x: x0, y: y0 },
            ]),
            vec![],
        )
    }
}

/// A single candidate sweep path for one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateOption {
    pub entry: Point,
    pub exit: Point,
    pub cost: f64,
    pub turns: u32,
    pub path: Vec<Point>,
}

impl CandidateOption {
    /// Build a candidate from a waypoint path, computing `entry`/`exit`/
    /// `cost`/`turns` from it. Panics if `path` is empty — callers never
    /// construct a candidate from an empty path (an empty-partition cell
    /// list is filtered out before candidates are generated).
    pub fn from_path(path: Vec<Point>) -> Self {
        assert!(!path.is_empty(), "candidate path must have at least one waypoint");
        let cost = path_length(&path);
        let turns = count_turns(&path);
        let entry = path[0];
        let exit = *path.last().unwrap();
        Self { entry, exit, cost, turns, path }
    }
}

/// Sum of Euclidean lengths of consecutive segments in `path`.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| euclidean(w[0], w[1]))
        .sum()
}

pub fn euclidean(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Number of consecutive triples in `path` whose heading changes by more
/// than `1e-7` radians (normalized to `(-pi, pi]`).
pub fn count_turns(path: &[Point]) -> u32 {
    if path.len() < 3 {
        return 0;
    }
    let orientations: Vec<f64> = path
        .windows(2)
        .map(|w| (w[1].y - w[0].y).atan2(w[1].x - w[0].x))
        .collect();

    orientations
        .windows(2)
        .filter(|w| {
            let mut dtheta = w[1] - w[0];
            dtheta = (dtheta + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI)
                - std::f64::consts::PI;
            dtheta.abs() > 1e-7
        })
        .count() as u32
}

/// A positive tolerance/grid-spacing value (`TOL` in the specification).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tol(f64);

impl Tol {
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !(value > 0.0) {
            return Err(CppError::InvalidInput(format!(
                "tolerance/cell_size must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.0
    }

    /// `round(v / tol) * tol`, applied everywhere unique-coordinate
    /// enumeration occurs (spec §9 "Numeric tolerance").
    #[inline]
    pub fn snap(&self, v: f64) -> f64 {
        (v / self.0).round() * self.0
    }
}
