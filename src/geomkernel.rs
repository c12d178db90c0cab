//! Restricted geometry kernel for axis-aligned polygons.
//!
//! Per the design notes, a faithful implementation can either depend on a
//! mature 2D geometry library or implement a kernel restricted to
//! rectilinear polygons, where every operation reduces to interval
//! arithmetic and rectangle decomposition. This module takes the former
//! path for union (`geo::BooleanOps`, as the teacher already does in
//! `geom/geom.rs`/`geometry/overlap.rs`) and the latter for the
//! rectilinear-specific operations `geo` has no direct primitive for:
//! splitting by an infinite axis-aligned line and counting boundary
//! crossings of a sweep line.

use geo::{Area, BooleanOps, BoundingRect, LineString, Polygon, Rect};

use crate::types::Point;

/// The orientation of a sweep/cut line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A horizontal line at a fixed `y`, extending across `x`.
    Horizontal,
    /// A vertical line at a fixed `x`, extending across `y`.
    Vertical,
}

/// Bounding rectangle of a polygon, or `None` if its exterior is empty.
pub fn bounds(poly: &Polygon<f64>) -> Option<Rect<f64>> {
    poly.bounding_rect()
}

/// A polygon is empty if its exterior ring has no area-bearing vertices.
pub fn is_empty(poly: &Polygon<f64>) -> bool {
    poly.exterior().0.len() < 4 || poly.unsigned_area() <= 0.0
}

/// All points where the infinite line `axis`/`coord` crosses the polygon
/// boundary (exterior ring and all interior rings), sorted along the axis
/// perpendicular to `axis`. When the line runs collinear with an edge, both
/// endpoints of that edge are included (spec §4.1: "if the intersection
/// includes collinear segments... treat each such segment as contributing
/// its two endpoints"). Coincident points contributed by adjacent edges
/// (the line passing exactly through a shared vertex) are deduplicated.
pub fn boundary_crossings(poly: &Polygon<f64>, axis: Axis, coord: f64) -> Vec<Point> {
    let mut pts = Vec::new();
    let mut visit = |ring: &LineString<f64>| collect_ring_crossings(ring, axis, coord, &mut pts);
    visit(poly.exterior());
    for interior in poly.interiors() {
        visit(interior);
    }

    let free_axis = |p: &Point| match axis {
        Axis::Horizontal => p.x,
        Axis::Vertical => p.y,
    };
    pts.sort_by(|a, b| free_axis(a).partial_cmp(&free_axis(b)).unwrap());
    pts.dedup_by(|a, b| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
    pts
}

fn collect_ring_crossings(ring: &LineString<f64>, axis: Axis, coord: f64, out: &mut Vec<Point>) {
    for line in ring.lines() {
        let (s, e) = (line.start, line.end);
        let (s_c, e_c) = match axis {
            Axis::Horizontal => (s.y, e.y),
            Axis::Vertical => (s.x, e.x),
        };
        if s_c == coord && e_c == coord {
            // Collinear with the sweep: contribute both endpoints.
            out.push(s);
            out.push(e);
        } else if (s_c < coord && e_c > coord) || (s_c > coord && e_c < coord) {
            // Strict crossing of a perpendicular edge.
            out.push(match axis {
                Axis::Horizontal => Point { x: s.x, y: coord },
                Axis::Vertical => Point { x: coord, y: s.y },
            });
        } else if s_c == coord {
            out.push(s);
        } else if e_c == coord {
            out.push(e);
        }
    }
}

/// Split `poly` by the infinite line `axis`/`coord` into its pieces on
/// either side, dropping empty pieces and flattening multi-polygon
/// results. Returns a single-element vector (the unmodified polygon) when
/// the line does not separate the polygon into two non-empty halves ("the
/// line missed": spec §4.2 step 4).
pub fn split_by_line(poly: &Polygon<f64>, axis: Axis, coord: f64) -> Vec<Polygon<f64>> {
    let Some(b) = bounds(poly) else { return vec![] };
    let pad = 1.0 + (b.width() + b.height()).max(1.0);

    let (low_rect, high_rect) = match axis {
        Axis::Horizontal => (
            rect(b.min().x - pad, b.min().y - pad, b.max().x + pad, coord),
            rect(b.min().x - pad, coord, b.max().x + pad, b.max().y + pad),
        ),
        Axis::Vertical => (
            rect(b.min().x - pad, b.min().y - pad, coord, b.max().y + pad),
            rect(coord, b.min().y - pad, b.max().x + pad, b.max().y + pad),
        ),
    };

    let mut pieces = Vec::new();
    for half in [low_rect, high_rect] {
        let clipped = poly.intersection(&half);
        for p in clipped.0 {
            if !is_empty(&p) {
                pieces.push(p);
            }
        }
    }

    if pieces.is_empty() {
        vec![poly.clone()]
    } else {
        pieces
    }
}

fn rect(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Polygon<f64> {
    Rect::new(
        geo::Coord { x: minx, y: miny },
        geo::Coord { x: maxx, y: maxy },
    )
    .to_polygon()
}

/// Rectangle `[minx, maxx] x [miny, maxy]` as a polygon, for the gap
/// quantifier's per-band intersection (spec §4.1).
pub fn rect_poly_for_band(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Polygon<f64> {
    rect(minx, miny, maxx, maxy)
}

/// Union of two polygons, flattened into its component polygons (empty
/// when both inputs are empty, more than one element when the union is
/// disjoint or only touches at a point/edge).
pub fn union(a: &Polygon<f64>, b: &Polygon<f64>) -> Vec<Polygon<f64>> {
    a.union(b).0
}

/// Area of the intersection of two polygons.
pub fn intersection_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    a.intersection(b).unsigned_area()
}

/// Total length of boundary shared between `a` and `b`: the sum, over all
/// axis-aligned overlapping sub-segments between an edge of `a`'s rings and
/// an edge of `b`'s rings, of the overlap length. Restricted-kernel
/// interval arithmetic per spec §9, used by the partition merger's
/// adjacency gate (spec §4.3).
pub fn shared_boundary_length(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    let edges_a = all_edges(a);
    let edges_b = all_edges(b);

    let mut total = 0.0;
    for ea in &edges_a {
        for eb in &edges_b {
            total += overlap_length(ea, eb);
        }
    }
    total
}

#[derive(Clone, Copy)]
enum Edge {
    Horizontal { y: f64, x0: f64, x1: f64 },
    Vertical { x: f64, y0: f64, y1: f64 },
}

fn all_edges(poly: &Polygon<f64>) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut collect = |ring: &LineString<f64>| {
        for line in ring.lines() {
            let (s, e) = (line.start, line.end);
            if s.y == e.y {
                edges.push(Edge::Horizontal { y: s.y, x0: s.x.min(e.x), x1: s.x.max(e.x) });
            } else if s.x == e.x {
                edges.push(Edge::Vertical { x: s.x, y0: s.y.min(e.y), y1: s.y.max(e.y) });
            }
            // Non-axis-aligned edges are outside this kernel's contract
            // (inputs are assumed rectilinear) and contribute no overlap.
        }
    };
    collect(poly.exterior());
    for interior in poly.interiors() {
        collect(interior);
    }
    edges
}

fn overlap_length(a: &Edge, b: &Edge) -> f64 {
    match (a, b) {
        (Edge::Horizontal { y: ya, x0: a0, x1: a1 }, Edge::Horizontal { y: yb, x0: b0, x1: b1 })
            if ya == yb =>
        {
            (a1.min(*b1) - a0.max(*b0)).max(0.0)
        }
        (Edge::Vertical { x: xa, y0: a0, y1: a1 }, Edge::Vertical { x: xb, y0: b0, y1: b1 })
            if xa == xb =>
        {
            (a1.min(*b1) - a0.max(*b0)).max(0.0)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect_poly(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Polygon<f64> {
        rect(minx, miny, maxx, maxy)
    }

    #[test]
    fn crossings_of_rectangle_are_two() {
        let poly = rect_poly(0.0, 0.0, 10.0, 4.0);
        let pts = boundary_crossings(&poly, Axis::Horizontal, 2.0);
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn split_rectangle_in_half() {
        let poly = rect_poly(0.0, 0.0, 10.0, 4.0);
        let pieces = split_by_line(&poly, Axis::Vertical, 5.0);
        assert_eq!(pieces.len(), 2);
        for p in &pieces {
            assert_relative_eq!(p.unsigned_area(), 20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn split_missing_the_polygon_returns_single_piece() {
        let poly = rect_poly(0.0, 0.0, 10.0, 4.0);
        let pieces = split_by_line(&poly, Axis::Vertical, 100.0);
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn shared_edge_length_of_adjacent_rectangles() {
        let a = rect_poly(0.0, 0.0, 5.0, 4.0);
        let b = rect_poly(5.0, 0.0, 10.0, 4.0);
        assert_relative_eq!(shared_boundary_length(&a, &b), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn disjoint_rectangles_share_nothing() {
        let a = rect_poly(0.0, 0.0, 5.0, 4.0);
        let b = rect_poly(6.0, 0.0, 10.0, 4.0);
        assert_relative_eq!(shared_boundary_length(&a, &b), 0.0, epsilon = 1e-9);
    }
}
