#![allow(dead_code)]
use chromatic_subdivision::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Corners of the unit tetrahedron.
pub fn unit_tet() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ]
}

/// `n` points with coordinates in `[-1, 1)` and colors in `0..n_colors`.
pub fn random_cloud(n: usize, n_colors: i32, seed: u64) -> (Vec<Point3>, Vec<i32>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect();
    let colors = (0..n).map(|_| rng.gen_range(0..n_colors)).collect();
    (points, colors)
}

/// Every 4-subset of `0..n` that spans at least two colors.
pub fn multicolored_quads(colors: &[i32]) -> Vec<Tetrahedron> {
    let n = colors.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    let tet = [a, b, c, d];
                    if is_multicolored(&tet, colors).unwrap() {
                        out.push(tet);
                    }
                }
            }
        }
    }
    out
}

/// `(size-1, size-2, size-3)` entry counts.
pub fn counts_by_len(filtration: &[FiltrationEntry]) -> (usize, usize, usize) {
    let count = |len| filtration.iter().filter(|e| e.simplex.len() == len).count();
    (count(1), count(2), count(3))
}

/// Sizes non-decreasing; values non-decreasing within a size group.
pub fn assert_grouped_and_sorted(filtration: &[FiltrationEntry]) {
    for w in filtration.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        assert!(
            a.simplex.len() < b.simplex.len()
                || (a.simplex.len() == b.simplex.len() && a.value <= b.value),
            "out of order: {a:?} before {b:?}"
        );
    }
}
