//! Chromatic partitioning of tetrahedra.
//!
//! A tetrahedron's four point indices are grouped by color label into
//! [`PartitionBlock`]s. The canonical block order produced by
//! [`chromatic_partition`] is:
//!
//! 1. larger blocks first;
//! 2. among equal-size blocks, ascending minimum point index.
//!
//! Indices inside a block are sorted ascending. With this order a two-block
//! partition is always `{2,2}` or `{3,1}`, and a three-block partition always
//! presents its pair first followed by the two singletons by point index.

use crate::chromatic::shape::PartitionShape;
use crate::interface_error::InterfaceError;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Four point indices of a heterogeneous cell.
pub type Tetrahedron = [usize; 4];

/// Points of one tetrahedron sharing a color label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartitionBlock {
    color: i32,
    points: Vec<usize>,
}

impl PartitionBlock {
    /// Creates a block; `points` are sorted.
    pub fn new(color: i32, mut points: Vec<usize>) -> Self {
        points.sort_unstable();
        Self { color, points }
    }

    pub fn color(&self) -> i32 {
        self.color
    }

    pub fn points(&self) -> &[usize] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn min_point(&self) -> usize {
        self.points.first().copied().unwrap_or(usize::MAX)
    }
}

/// Ordered color blocks covering exactly the four points of a tetrahedron.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromaticPartition {
    blocks: Vec<PartitionBlock>,
    shape: PartitionShape,
}

impl ChromaticPartition {
    /// Wraps caller-ordered blocks, validating that they form a supported
    /// partition of four distinct points. Block order is kept as given.
    ///
    /// # Errors
    /// - [`InterfaceError::MalformedPartition`] for empty blocks, overlapping
    ///   blocks, or blocks not covering four points.
    /// - [`InterfaceError::UnsupportedPartitionShape`] for a single block.
    pub fn from_blocks(blocks: Vec<PartitionBlock>) -> Result<Self, InterfaceError> {
        if blocks.iter().any(PartitionBlock::is_empty) {
            return Err(InterfaceError::MalformedPartition("empty block".into()));
        }
        let total: usize = blocks.iter().map(PartitionBlock::len).sum();
        let distinct = blocks.iter().flat_map(|b| b.points()).unique().count();
        if total != 4 || distinct != 4 {
            return Err(InterfaceError::MalformedPartition(format!(
                "blocks cover {distinct} distinct of {total} points, expected 4"
            )));
        }
        let sizes: Vec<usize> = blocks.iter().map(PartitionBlock::len).collect();
        let shape = PartitionShape::from_block_sizes(&sizes)
            .ok_or(InterfaceError::UnsupportedPartitionShape(sizes))?;
        Ok(Self { blocks, shape })
    }

    pub fn blocks(&self) -> &[PartitionBlock] {
        &self.blocks
    }

    pub fn shape(&self) -> PartitionShape {
        self.shape
    }

    /// Block sizes in partition order.
    pub fn block_sizes(&self) -> Vec<usize> {
        self.blocks.iter().map(PartitionBlock::len).collect()
    }
}

/// Groups the points of `tet` by color in canonical block order.
///
/// # Errors
/// - [`InterfaceError::PointIndexOutOfRange`] if a vertex has no color label.
/// - [`InterfaceError::DuplicateTetrahedronVertex`] if a vertex repeats.
/// - [`InterfaceError::MonochromaticTetrahedron`] if all four share a color.
pub fn chromatic_partition(
    tet: &Tetrahedron,
    color_labels: &[i32],
) -> Result<ChromaticPartition, InterfaceError> {
    if tet.iter().unique().count() != 4 {
        return Err(InterfaceError::DuplicateTetrahedronVertex(*tet));
    }
    let mut by_color: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for &v in tet {
        let color = *color_labels
            .get(v)
            .ok_or(InterfaceError::PointIndexOutOfRange {
                index: v,
                len: color_labels.len(),
            })?;
        by_color.entry(color).or_default().push(v);
    }
    if by_color.len() < 2 {
        let color = color_labels[tet[0]];
        return Err(InterfaceError::MonochromaticTetrahedron {
            tetrahedron: *tet,
            color,
        });
    }
    let blocks = by_color
        .into_iter()
        .map(|(color, points)| PartitionBlock::new(color, points))
        .sorted_by_key(|b| (Reverse(b.len()), b.min_point()))
        .collect();
    ChromaticPartition::from_blocks(blocks)
}

/// Returns `true` if the four points of `tet` carry at least two colors.
///
/// # Errors
/// [`InterfaceError::PointIndexOutOfRange`] if a vertex has no color label.
pub fn is_multicolored(tet: &Tetrahedron, color_labels: &[i32]) -> Result<bool, InterfaceError> {
    let colors = tet
        .iter()
        .map(|&v| {
            color_labels
                .get(v)
                .copied()
                .ok_or(InterfaceError::PointIndexOutOfRange {
                    index: v,
                    len: color_labels.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(colors.iter().unique().count() >= 2)
}
