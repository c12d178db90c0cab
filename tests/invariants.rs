// Integration tests for invariants 2 (coverage) and 3 (cell conservation),
// exercised across the full pipeline and all five scenario polygons.

use sweepplan::{InMemoryPolygonStore, PipelineOptions, PolygonStore};

#[test]
fn coverage_union_of_merged_partitions_has_same_area_as_input() {
    use geo::{Area, BooleanOps};

    let store = InMemoryPolygonStore::with_scenarios();
    for name in store.list_names() {
        let polygon = store.get(&name).unwrap();
        let out = sweepplan::run_pipeline(&polygon, PipelineOptions::default()).unwrap();

        let mut union = out.diagnostics.merged_partitions[0].clone();
        for piece in &out.diagnostics.merged_partitions[1..] {
            let pieces = union.union(piece);
            union = pieces
                .0
                .into_iter()
                .max_by(|a, b| Area::unsigned_area(a).partial_cmp(&Area::unsigned_area(b)).unwrap())
                .unwrap();
        }

        let input_area = polygon.unsigned_area();
        let union_area = union.unsigned_area();
        assert!(
            (input_area - union_area).abs() < 1e-6,
            "{name}: input area {input_area} vs merged-union area {union_area}"
        );
    }
}

#[test]
fn every_cell_is_assigned_to_at_most_one_partition() {
    let store = InMemoryPolygonStore::with_scenarios();
    for name in store.list_names() {
        let polygon = store.get(&name).unwrap();
        let out = sweepplan::run_pipeline(&polygon, PipelineOptions::default()).unwrap();
        let mut seen = std::collections::HashSet::new();
        for (_, cell_list) in &out.diagnostics.cell_assignment {
            for cell in cell_list {
                assert!(seen.insert(*cell), "{name}: cell {cell:?} assigned to more than one partition");
            }
        }
    }
}

#[test]
fn global_path_visits_every_assigned_cell_center() {
    let store = InMemoryPolygonStore::with_scenarios();
    for name in store.list_names() {
        let polygon = store.get(&name).unwrap();
        let out = sweepplan::run_pipeline(&polygon, PipelineOptions::default()).unwrap();
        for (_, cell_list) in &out.diagnostics.cell_assignment {
            for cell in cell_list {
                let center = cell.center(1.0);
                assert!(
                    out.global_path
                        .iter()
                        .any(|p| (p.x - center.x).abs() < 1e-9 && (p.y - center.y).abs() < 1e-9),
                    "{name}: cell center {center:?} missing from the global path"
                );
            }
        }
    }
}
