//! Rasterizer and cell distributor (spec §4.4): builds a regular grid over
//! a polygon's bounding box and assigns each covered cell to the
//! partition with maximum area overlap.

use geo::{Area, BooleanOps, BoundingRect, Intersects, Polygon};
use rstar::{RTree, RTreeObject, AABB};

use crate::geomkernel;
use crate::types::CellId;

/// Rasterize `poly` at grid spacing `cell_size`: every cell whose square
/// intersects `poly` (including zero-area boundary contact) is included.
pub fn rasterize(poly: &Polygon<f64>, cell_size: f64) -> Vec<CellId> {
    let Some(b) = geomkernel::bounds(poly) else {
        return vec![];
    };

    let col_min = (b.min().x / cell_size).floor() as i64;
    let row_min = (b.min().y / cell_size).floor() as i64;
    let col_max = (b.max().x / cell_size).ceil() as i64;
    let row_max = (b.max().y / cell_size).ceil() as i64;

    let mut cells = Vec::new();
    for row in row_min..row_max {
        for col in col_min..col_max {
            let cell = CellId::new(row, col);
            if cell.polygon(cell_size).intersects(poly) {
                cells.push(cell);
            }
        }
    }
    cells
}

struct IndexedBounds {
    idx: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedBounds {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Assign each cell in `cells` to the partition in `partitions` with
/// largest area overlap, breaking ties by lowest partition index. Cells
/// with zero overlap everywhere are dropped (spec §4.4/§7). Candidate
/// partitions are narrowed with an R-tree bounding-box query before exact
/// area is computed, in the shape of the teacher's `BoundingBox`/`RTree`
/// pattern (`src/geom/geom.rs`).
pub fn distribute_cells(
    cells: &[CellId],
    cell_size: f64,
    partitions: &[Polygon<f64>],
) -> Vec<(usize, Vec<CellId>)> {
    let mut out: Vec<Vec<CellId>> = vec![Vec::new(); partitions.len()];
    if cells.is_empty() || partitions.is_empty() {
        return out.into_iter().enumerate().collect();
    }

    let indexed: Vec<IndexedBounds> = partitions
        .iter()
        .enumerate()
        .filter_map(|(idx, p)| {
            p.bounding_rect().map(|r| IndexedBounds {
                idx,
                envelope: AABB::from_corners(r.min().into(), r.max().into()),
            })
        })
        .collect();
    let tree = RTree::bulk_load(indexed);

    for &cell in cells {
        let cell_poly = cell.polygon(cell_size);
        let Some(cb) = cell_poly.bounding_rect() else { continue };
        let search = AABB::from_corners(cb.min().into(), cb.max().into());

        let mut best_idx: Option<usize> = None;
        let mut best_area = 0.0_f64;
        for cand in tree.locate_in_envelope_intersecting(&search) {
            let area = cell_poly.intersection(&partitions[cand.idx]).unsigned_area();
            if area > best_area {
                best_area = area;
                best_idx = Some(cand.idx);
            } else if area == best_area && area > 0.0 {
                if let Some(b) = best_idx {
                    if cand.idx < b {
                        best_idx = Some(cand.idx);
                    }
                }
            }
        }

        if let Some(idx) = best_idx {
            out[idx].push(cell);
        }
    }

    out.into_iter().enumerate().collect()
}
