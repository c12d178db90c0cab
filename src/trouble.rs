//! Trouble analyzer (spec §4.1): detects whether a rectilinear polygon is
//! non-monotone ("troublesome") in the horizontal and/or vertical
//! direction, and quantifies how severe the non-monotonicity is per axis.

use geo::{BooleanOps, Polygon};

use crate::geomkernel::{self, Axis};
use crate::types::{Point, Tol};

/// `(h_trouble, v_trouble)`: `true` when some candidate sweep line
/// orthogonal to that axis crosses the polygon boundary more than twice.
pub fn is_troublesome(poly: &Polygon<f64>, tol: Tol) -> (bool, bool) {
    let ys = unique_snapped_coords(poly, tol, Component::Y, RingSource::AllRings);
    let xs = unique_snapped_coords(poly, tol, Component::X, RingSource::AllRings);

    let h_trouble = candidate_midpoints(&ys)
        .any(|y| geomkernel::boundary_crossings(poly, Axis::Horizontal, y).len() > 2);
    let v_trouble = candidate_midpoints(&xs)
        .any(|x| geomkernel::boundary_crossings(poly, Axis::Vertical, x).len() > 2);

    (h_trouble, v_trouble)
}

/// Where `quantify_gaps` draws its candidate coordinates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingSource {
    Exterior,
    AllRings,
}

/// Aggregate gap metrics for one polygon, per spec §4.1.
#[derive(Debug, Clone)]
pub struct GapMetrics {
    pub max_h_gap: f64,
    pub total_h_gap: f64,
    pub max_v_gap: f64,
    pub total_v_gap: f64,
    pub combined_gap: f64,
    pub horizontal_union: Option<Polygon<f64>>,
    pub vertical_union: Option<Polygon<f64>>,
}

/// One inter-coordinate band's worth of detail, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct BandDetail {
    pub candidate_index: usize,
    pub candidate_value: f64,
    pub points: Vec<Point>,
    pub gaps: Vec<(Point, Point, f64)>,
    pub is_troublesome: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GapDetails {
    pub horizontal: Vec<BandDetail>,
    pub vertical: Vec<BandDetail>,
}

pub fn quantify_gaps(poly: &Polygon<f64>, tol: Tol, source: RingSource) -> (GapMetrics, GapDetails) {
    let ys = unique_snapped_coords(poly, tol, Component::Y, source);
    let xs = unique_snapped_coords(poly, tol, Component::X, source);
    let Some(b) = geomkernel::bounds(poly) else {
        return (
            GapMetrics {
                max_h_gap: 0.0,
                total_h_gap: 0.0,
                max_v_gap: 0.0,
                total_v_gap: 0.0,
                combined_gap: 0.0,
                horizontal_union: None,
                vertical_union: None,
            },
            GapDetails::default(),
        );
    };

    let mut max_h_gap = 0.0_f64;
    let mut total_h_gap = 0.0_f64;
    let mut horizontal_union: Option<Polygon<f64>> = None;
    let mut horizontal = Vec::new();

    for (i, (lo, hi)) in ys.windows(2).map(|w| (w[0], w[1])).enumerate() {
        let y = (lo + hi) / 2.0;
        let mut pts = geomkernel::boundary_crossings(poly, Axis::Horizontal, y);
        pts.sort_by(|a, c| a.x.partial_cmp(&c.x).unwrap());

        let gaps = alternating_gaps(&pts, Component::X);
        for &(_, _, gap) in &gaps {
            total_h_gap += gap;
            max_h_gap = max_h_gap.max(gap);
        }

        let is_trouble = pts.len() > 2;
        if is_trouble {
            let band = geomkernel::rect_poly_for_band(b.min().x, lo, b.max().x, hi);
            if let Some(piece) = single_intersection(poly, &band) {
                horizontal_union = Some(match horizontal_union {
                    None => piece,
                    Some(existing) => first_union_piece(&existing, &piece),
                });
            }
        }

        horizontal.push(BandDetail {
            candidate_index: i,
            candidate_value: y,
            points: pts,
            gaps,
            is_troublesome: is_trouble,
        });
    }

    let mut max_v_gap = 0.0_f64;
    let mut total_v_gap = 0.0_f64;
    let mut vertical_union: Option<Polygon<f64>> = None;
    let mut vertical = Vec::new();

    for (i, (lo, hi)) in xs.windows(2).map(|w| (w[0], w[1])).enumerate() {
        let x = (lo + hi) / 2.0;
        let mut pts = geomkernel::boundary_crossings(poly, Axis::Vertical, x);
        pts.sort_by(|a, c| a.y.partial_cmp(&c.y).unwrap());

        let gaps = alternating_gaps(&pts, Component::Y);
        for &(_, _, gap) in &gaps {
            total_v_gap += gap;
            max_v_gap = max_v_gap.max(gap);
        }

        let is_trouble = pts.len() > 2;
        if is_trouble {
            let band = geomkernel::rect_poly_for_band(lo, b.min().y, hi, b.max().y);
            if let Some(piece) = single_intersection(poly, &band) {
                vertical_union = Some(match vertical_union {
                    None => piece,
                    Some(existing) => first_union_piece(&existing, &piece),
                });
            }
        }

        vertical.push(BandDetail {
            candidate_index: i,
            candidate_value: x,
            points: pts,
            gaps,
            is_troublesome: is_trouble,
        });
    }

    (
        GapMetrics {
            max_h_gap,
            total_h_gap,
            max_v_gap,
            total_v_gap,
            combined_gap: total_h_gap + total_v_gap,
            horizontal_union,
            vertical_union,
        },
        GapDetails { horizontal, vertical },
    )
}

/// Pairs `(pts[2k+1], pts[2k+2])` per spec §4.1, preserving the original's
/// documented odd/even pairing (see DESIGN.md "Open question: gap
/// pairing").
fn alternating_gaps(pts: &[Point], component: Component) -> Vec<(Point, Point, f64)> {
    if pts.len() <= 2 {
        return vec![];
    }
    let mut gaps = Vec::new();
    let mut j = 1;
    while j + 1 < pts.len() {
        let (p, q) = (pts[j], pts[j + 1]);
        let gap = match component {
            Component::X => q.x - p.x,
            Component::Y => q.y - p.y,
        };
        gaps.push((p, q, gap));
        j += 2;
    }
    gaps
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    X,
    Y,
}

fn unique_snapped_coords(poly: &Polygon<f64>, tol: Tol, component: Component, source: RingSource) -> Vec<f64> {
    let mut values: Vec<f64> = Vec::new();
    let mut collect_ring = |ring: &geo::LineString<f64>| {
        for c in &ring.0 {
            values.push(tol.snap(match component {
                Component::X => c.x,
                Component::Y => c.y,
            }));
        }
    };
    collect_ring(poly.exterior());
    if source == RingSource::AllRings {
        for interior in poly.interiors() {
            collect_ring(interior);
        }
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values.dedup();
    values
}

fn candidate_midpoints(coords: &[f64]) -> impl Iterator<Item = f64> + '_ {
    coords.windows(2).map(|w| (w[0] + w[1]) / 2.0)
}

/// The single polygon component of `poly ∩ band`, or `None` if empty.
/// `band` rectangles never produce more than one component against a
/// simply-connected band slice of a rectilinear polygon in practice; if
/// more than one is returned we keep only the largest by area, matching
/// the spirit of `quantify_gap_severity`'s single running union.
fn single_intersection(poly: &Polygon<f64>, band: &Polygon<f64>) -> Option<Polygon<f64>> {
    let mut parts = poly.intersection(band).0;
    parts.retain(|p| !geomkernel::is_empty(p));
    parts.into_iter().max_by(|a, b| {
        geo::Area::unsigned_area(a)
            .partial_cmp(&geo::Area::unsigned_area(b))
            .unwrap()
    })
}

fn first_union_piece(a: &Polygon<f64>, b: &Polygon<f64>) -> Polygon<f64> {
    let mut pieces = geomkernel::union(a, b);
    pieces.sort_by(|x, y| {
        geo::Area::unsigned_area(y)
            .partial_cmp(&geo::Area::unsigned_area(x))
            .unwrap()
    });
    pieces.into_iter().next().unwrap_or_else(|| a.clone())
}
