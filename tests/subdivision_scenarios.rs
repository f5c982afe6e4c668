mod util;

use chromatic_subdivision::prelude::*;
use std::collections::HashSet;
use util::{assert_grouped_and_sorted, counts_by_len, multicolored_quads, random_cloud, unit_tet};

#[test]
fn two_two_single_tetrahedron() {
    let points = unit_tet();
    let (barycenters, filtration) =
        subdivide_and_filter(&points, &[0, 0, 1, 1], &[[0, 1, 2, 3]]).unwrap();

    assert_eq!(barycenters.len(), 9);
    assert_eq!(counts_by_len(&filtration), (9, 16, 8));
    assert_eq!(filtration.len(), 33);

    // The apex {uv|xy} is the ninth registration.
    assert_eq!(barycenters[8], Point3::new(0.25, 0.25, 0.25));
    let apex = filtration
        .iter()
        .find(|e| e.simplex == Simplex::from_ids([SimplexId::new(8)]))
        .unwrap();
    // Distance between (0.5, 0, 0) and (0, 0.5, 0.5).
    assert!((apex.value - 0.75f64.sqrt()).abs() < 1e-12);
    assert_grouped_and_sorted(&filtration);
}

#[test]
fn three_one_single_tetrahedron() {
    let (barycenters, filtration) =
        subdivide_and_filter(&unit_tet(), &[0, 0, 0, 1], &[[0, 1, 2, 3]]).unwrap();
    assert_eq!(barycenters.len(), 7);
    assert_eq!(counts_by_len(&filtration), (7, 12, 6));
    assert_eq!(filtration.len(), 25);
}

#[test]
fn one_three_input_order_is_equivalent() {
    // Lone color listed first in the point order.
    let (barycenters, filtration) =
        subdivide_and_filter(&unit_tet(), &[1, 0, 0, 0], &[[0, 1, 2, 3]]).unwrap();
    assert_eq!(barycenters.len(), 7);
    assert_eq!(counts_by_len(&filtration), (7, 12, 6));
}

#[test]
fn two_one_one_single_tetrahedron() {
    let (barycenters, filtration) =
        subdivide_and_filter(&unit_tet(), &[0, 1, 0, 2], &[[0, 1, 2, 3]]).unwrap();
    assert_eq!(barycenters.len(), 10);
    assert_eq!(counts_by_len(&filtration), (10, 15, 10));
}

#[test]
fn one_one_one_one_single_tetrahedron() {
    let (barycenters, filtration) =
        subdivide_and_filter(&unit_tet(), &[0, 1, 2, 3], &[[0, 1, 2, 3]]).unwrap();
    assert_eq!(barycenters.len(), 11);
    assert_eq!(counts_by_len(&filtration), (11, 20, 12));
    assert_eq!(filtration.len(), 43);
    assert_eq!(barycenters[10], Point3::new(0.25, 0.25, 0.25));
}

#[test]
fn malformed_inputs() {
    let points = unit_tet();
    assert_eq!(
        subdivide_and_filter(&points[..3], &[0, 0, 1, 1], &[]),
        Err(InterfaceError::ColorLabelLengthMismatch {
            points: 3,
            labels: 4
        })
    );
    let mono = subdivide_and_filter(&points, &[2, 2, 2, 2], &[[0, 1, 2, 3]]).unwrap_err();
    assert!(matches!(mono, InterfaceError::MonochromaticTetrahedron { .. }));
    assert!(mono.is_invalid_input());
    assert!(matches!(
        subdivide_and_filter(&points, &[0, 0, 1, 1], &[[0, 1, 2, 9]]),
        Err(InterfaceError::PointIndexOutOfRange { index: 9, .. })
    ));
}

#[test]
fn shared_face_is_merged_once() {
    let mut points = unit_tet();
    points.push(Point3::new(1.0, 1.0, 1.0));
    let colors = [0, 0, 1, 1, 0];
    // Both cells are 2-2 and share the face {0, 2, 3}.
    let tets = [[0, 1, 2, 3], [0, 2, 3, 4]];
    let (barycenters, filtration) = subdivide_and_filter(&points, &colors, &tets).unwrap();

    // {0,2}, {0,3} and {0,2,3} are registered once.
    assert_eq!(barycenters.len(), 9 + 9 - 3);
    // Edges {0,2}-{0,2,3} and {0,3}-{0,2,3} are emitted by both cells.
    assert_eq!(counts_by_len(&filtration), (15, 30, 16));

    let simplices: HashSet<&Simplex> = filtration.iter().map(|e| &e.simplex).collect();
    assert_eq!(simplices.len(), filtration.len());
    assert_grouped_and_sorted(&filtration);
}

#[test]
fn shared_combination_keeps_first_registration() {
    // {0,2,3} is a|u|x in the 2-1-1 cell and a|i|u in the 1-1-1-1 cell.
    let mut points = unit_tet();
    points.push(Point3::new(2.0, 2.0, 2.0));
    let colors = [0, 0, 1, 2, 3];
    let mut run = BarycentricSubdivision::new(&points, &colors).unwrap();
    assert_eq!(
        run.process_tetrahedron(&[0, 1, 2, 3]).unwrap(),
        PartitionShape::TwoOneOne
    );
    let first = run.registry().get(&[0, 2, 3]).unwrap();
    let before = run.registry().len();

    assert_eq!(
        run.process_tetrahedron(&[0, 2, 3, 4]).unwrap(),
        PartitionShape::OneOneOneOne
    );
    assert_eq!(run.registry().get(&[0, 2, 3]), Some(first));
    // {0,2}, {0,3}, {2,3} and {0,2,3} were already known.
    assert_eq!(run.registry().len(), before + 11 - 4);
    run.validate_invariants().unwrap();
}

#[test]
fn dense_ids_match_barycenter_list() {
    let (points, colors) = random_cloud(9, 3, 7);
    let tets = multicolored_quads(&colors);
    let (barycenters, filtration) = subdivide_and_filter(&points, &colors, &tets).unwrap();

    let max_id = filtration
        .iter()
        .flat_map(|e| e.simplex.ids().iter().copied())
        .max()
        .unwrap();
    assert_eq!(max_id.index() + 1, barycenters.len());
    assert_eq!(counts_by_len(&filtration).0, barycenters.len());
}

#[test]
fn repeated_runs_are_identical() {
    let (points, colors) = random_cloud(8, 4, 42);
    let tets = multicolored_quads(&colors);
    let a = subdivide_and_filter(&points, &colors, &tets).unwrap();
    let b = subdivide_and_filter(&points, &colors, &tets).unwrap();
    assert_eq!(a, b);
}
