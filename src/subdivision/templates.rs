//! Reference scaffold templates for the four chromatic partition shapes.
//!
//! Each template lays out the tetrahedron's vertices block by block in
//! partition order (slot `0..4`) and lists its cross-color combinations as
//! groups of slots. Edges and triangles refer to positions in that
//! combination list. The last combination is always the apex (the full
//! union); it is joined to every other combination by a spoke edge, and the
//! remaining `rim_edges` close a cycle around it that the triangles fan over.
//!
//! | shape   | slots       | combinations | edges | triangles |
//! |---------|-------------|--------------|-------|-----------|
//! | 2-2     | `uv.xy`     | 9            | 16    | 8         |
//! | 3-1     | `uvw.x`     | 7            | 12    | 6         |
//! | 2-1-1   | `ab.u.x`    | 10           | 15    | 10        |
//! | 1-1-1-1 | `a.i.u.x`   | 11           | 20    | 12        |
//!
//! The combination order is significant: rim edges and triangles are
//! positional, so each table must stay in step with its own combination list.

use crate::chromatic::shape::PartitionShape;

/// A combination: groups of vertex slots, one group per color block used.
pub type Combination = &'static [&'static [usize]];

/// Fixed combination list and adjacency for one partition shape.
#[derive(Debug)]
pub struct ScaffoldTemplate {
    pub combinations: &'static [Combination],
    /// Non-spoke edges, as combination positions.
    pub rim_edges: &'static [[usize; 2]],
    /// Triangles, as combination positions; each contains the apex.
    pub triangles: &'static [[usize; 3]],
}

impl ScaffoldTemplate {
    /// Position of the apex combination.
    pub fn apex(&self) -> usize {
        self.combinations.len() - 1
    }

    /// Spoke edges from the apex followed by the rim edges.
    pub fn edges(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        let apex = self.apex();
        (0..apex)
            .map(move |i| [apex, i])
            .chain(self.rim_edges.iter().copied())
    }

    pub fn edge_count(&self) -> usize {
        self.apex() + self.rim_edges.len()
    }
}

/// Slots `[u, v | x, y]`.
pub static TWO_TWO: ScaffoldTemplate = ScaffoldTemplate {
    combinations: &[
        &[&[0], &[2]],
        &[&[1], &[2]],
        &[&[1], &[3]],
        &[&[0], &[3]],
        &[&[0, 1], &[2]],
        &[&[1], &[2, 3]],
        &[&[0, 1], &[3]],
        &[&[0], &[2, 3]],
        &[&[0, 1], &[2, 3]],
    ],
    rim_edges: &[
        [0, 4],
        [1, 4],
        [1, 5],
        [2, 5],
        [2, 6],
        [3, 6],
        [3, 7],
        [0, 7],
    ],
    triangles: &[
        [8, 0, 4],
        [8, 4, 1],
        [8, 1, 5],
        [8, 5, 2],
        [8, 2, 6],
        [8, 6, 3],
        [8, 3, 7],
        [8, 7, 0],
    ],
};

/// Slots `[u, v, w | x]`.
pub static THREE_ONE: ScaffoldTemplate = ScaffoldTemplate {
    combinations: &[
        &[&[0], &[3]],
        &[&[1], &[3]],
        &[&[2], &[3]],
        &[&[0, 1], &[3]],
        &[&[1, 2], &[3]],
        &[&[0, 2], &[3]],
        &[&[0, 1, 2], &[3]],
    ],
    rim_edges: &[[0, 3], [1, 3], [1, 4], [2, 4], [2, 5], [0, 5]],
    triangles: &[
        [6, 0, 3],
        [6, 3, 1],
        [6, 1, 4],
        [6, 4, 2],
        [6, 2, 5],
        [6, 5, 0],
    ],
};

/// Slots `[a, b | u | x]`.
pub static TWO_ONE_ONE: ScaffoldTemplate = ScaffoldTemplate {
    combinations: &[
        &[&[0], &[2]],
        &[&[0], &[3]],
        &[&[1], &[3]],
        &[&[1], &[2]],
        &[&[2], &[3]],
        &[&[0], &[2], &[3]],
        &[&[0, 1], &[3]],
        &[&[1], &[2], &[3]],
        &[&[0, 1], &[2]],
        &[&[0, 1], &[2], &[3]],
    ],
    rim_edges: &[[0, 5], [1, 5], [2, 6], [3, 8], [4, 5], [4, 7]],
    triangles: &[
        [9, 0, 5],
        [9, 5, 4],
        [9, 4, 7],
        [9, 7, 3],
        [9, 3, 8],
        [9, 8, 0],
        [9, 2, 7],
        [9, 5, 1],
        [9, 1, 6],
        [9, 6, 2],
    ],
};

/// Slots `[a | i | u | x]`.
pub static ONE_ONE_ONE_ONE: ScaffoldTemplate = ScaffoldTemplate {
    combinations: &[
        &[&[0], &[1]],
        &[&[0], &[2]],
        &[&[0], &[3]],
        &[&[1], &[2]],
        &[&[1], &[3]],
        &[&[2], &[3]],
        &[&[0], &[1], &[2]],
        &[&[0], &[1], &[3]],
        &[&[1], &[2], &[3]],
        &[&[0], &[2], &[3]],
        &[&[0], &[1], &[2], &[3]],
    ],
    rim_edges: &[
        [0, 6],
        [1, 6],
        [3, 8],
        [4, 7],
        [5, 9],
        [0, 7],
        [1, 9],
        [3, 6],
        [4, 8],
        [5, 8],
    ],
    triangles: &[
        [10, 3, 8],
        [10, 8, 4],
        [10, 4, 7],
        [10, 7, 0],
        [10, 0, 6],
        [10, 6, 3],
        [10, 9, 1],
        [10, 5, 9],
        [10, 8, 5],
        [10, 1, 6],
        [10, 9, 2],
        [10, 2, 7],
    ],
};

/// Template for a shape. `OneThree` shares the 3-1 table; callers lay out
/// the three-point block first.
pub fn template_for(shape: PartitionShape) -> &'static ScaffoldTemplate {
    match shape {
        PartitionShape::TwoTwo => &TWO_TWO,
        PartitionShape::ThreeOne | PartitionShape::OneThree => &THREE_ONE,
        PartitionShape::TwoOneOne => &TWO_ONE_ONE,
        PartitionShape::OneOneOneOne => &ONE_ONE_ONE_ONE,
    }
}
