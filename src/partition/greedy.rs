//! Greedy partitioner (spec §4.2): recursively splits a troublesome
//! polygon along a chosen horizontal or vertical line until every leaf
//! piece is monotone in at least one axis, or a depth cap is reached.

use geo::Polygon;

use crate::diagnostics::{PassOutcome, PassRecord};
use crate::geomkernel::{self, Axis};
use crate::trouble::{self, RingSource};
use crate::types::Tol;

pub fn greedy_partition(poly: &Polygon<f64>, max_depth: u32, tol: Tol) -> (Vec<Polygon<f64>>, Vec<PassRecord>) {
    let mut passes = Vec::new();
    let pieces = recurse(poly, 0, max_depth, tol, &mut passes);
    (pieces, passes)
}

fn recurse(
    poly: &Polygon<f64>,
    depth: u32,
    max_depth: u32,
    tol: Tol,
    passes: &mut Vec<PassRecord>,
) -> Vec<Polygon<f64>> {
    let (h_trouble, v_trouble) = trouble::is_troublesome(poly, tol);
    let both_troublesome = h_trouble && v_trouble;

    if depth >= max_depth || !both_troublesome {
        passes.push(PassRecord {
            depth,
            subject_bounds: geomkernel::bounds(poly),
            metrics: None,
            cut_line: None,
            outcome: if depth >= max_depth {
                PassOutcome::DepthCapReached
            } else {
                PassOutcome::EmittedUnchanged
            },
        });
        return vec![poly.clone()];
    }

    let (metrics, _details) = trouble::quantify_gaps(poly, tol, RingSource::Exterior);
    let Some(b) = geomkernel::bounds(poly) else {
        return vec![poly.clone()];
    };

    // Choose the primary cut line per spec §4.2 step 3.
    let primary_cut: Option<(Axis, f64)> = match (&metrics.horizontal_union, &metrics.vertical_union) {
        (Some(hu), Some(vu)) => {
            if metrics.total_h_gap >= metrics.total_v_gap {
                let hb = geomkernel::bounds(hu).unwrap();
                Some((Axis::Horizontal, (hb.min().y + hb.max().y) / 2.0))
            } else {
                let vb = geomkernel::bounds(vu).unwrap();
                Some((Axis::Vertical, (vb.min().x + vb.max().x) / 2.0))
            }
        }
        (Some(hu), None) => {
            let hb = geomkernel::bounds(hu).unwrap();
            Some((Axis::Horizontal, (hb.min().y + hb.max().y) / 2.0))
        }
        (None, Some(vu)) => {
            let vb = geomkernel::bounds(vu).unwrap();
            Some((Axis::Vertical, (vb.min().x + vb.max().x) / 2.0))
        }
        (None, None) => None,
    };

    let Some((axis, coord)) = primary_cut else {
        passes.push(PassRecord {
            depth,
            subject_bounds: Some(b),
            metrics: Some(metrics),
            cut_line: None,
            outcome: PassOutcome::NoActionableCut,
        });
        return vec![poly.clone()];
    };

    let mut pieces = geomkernel::split_by_line(poly, axis, coord);
    let mut outcome = PassOutcome::Split;

    if pieces.len() <= 1 {
        // The chosen line missed; fall back to the other axis' union if
        // one exists (spec §4.2 step 4).
        let fallback = match axis {
            Axis::Horizontal => metrics.vertical_union.as_ref().map(|vu| {
                let vb = geomkernel::bounds(vu).unwrap();
                (Axis::Vertical, (vb.min().x + vb.max().x) / 2.0)
            }),
            Axis::Vertical => metrics.horizontal_union.as_ref().map(|hu| {
                let hb = geomkernel::bounds(hu).unwrap();
                (Axis::Horizontal, (hb.min().y + hb.max().y) / 2.0)
            }),
        };

        if let Some((fb_axis, fb_coord)) = fallback {
            pieces = geomkernel::split_by_line(poly, fb_axis, fb_coord);
            outcome = PassOutcome::FallbackSplit;
        }
    }

    if pieces.len() <= 1 {
        passes.push(PassRecord {
            depth,
            subject_bounds: Some(b),
            metrics: Some(metrics),
            cut_line: Some((axis, coord)),
            outcome: PassOutcome::NoActionableCut,
        });
        return vec![poly.clone()];
    }

    passes.push(PassRecord {
        depth,
        subject_bounds: Some(b),
        metrics: Some(metrics),
        cut_line: Some((axis, coord)),
        outcome,
    });

    pieces
        .into_iter()
        .filter(|p| !geomkernel::is_empty(p))
        .flat_map(|piece| recurse(&piece, depth + 1, max_depth, tol, passes))
        .collect()
}
