//! Shape metadata for chromatic partitions of a tetrahedron.

use serde::{Deserialize, Serialize};

/// The five ways four colored points can be split into color blocks,
/// named by block sizes in partition order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PartitionShape {
    /// Two colors, two points each.
    TwoTwo,
    /// Three points of one color, then one of another.
    ThreeOne,
    /// One point of one color, then three of another.
    OneThree,
    /// Three colors: a pair and two singletons.
    TwoOneOne,
    /// Four distinct colors.
    OneOneOneOne,
}

impl PartitionShape {
    /// Classifies an ordered block-size sequence.
    ///
    /// Any three-block sequence summing to four is necessarily a permutation
    /// of `{2,1,1}` and maps to [`PartitionShape::TwoOneOne`].
    pub fn from_block_sizes(sizes: &[usize]) -> Option<Self> {
        if sizes.iter().sum::<usize>() != 4 || sizes.contains(&0) {
            return None;
        }
        match sizes {
            [2, 2] => Some(PartitionShape::TwoTwo),
            [3, 1] => Some(PartitionShape::ThreeOne),
            [1, 3] => Some(PartitionShape::OneThree),
            [_, _, _] => Some(PartitionShape::TwoOneOne),
            [_, _, _, _] => Some(PartitionShape::OneOneOneOne),
            _ => None,
        }
    }

    /// Number of color blocks.
    pub fn block_count(self) -> usize {
        match self {
            PartitionShape::TwoTwo | PartitionShape::ThreeOne | PartitionShape::OneThree => 2,
            PartitionShape::TwoOneOne => 3,
            PartitionShape::OneOneOneOne => 4,
        }
    }

    /// Number of cross-color combinations the scaffold registers.
    pub fn combination_count(self) -> usize {
        match self {
            PartitionShape::TwoTwo => 9,
            PartitionShape::ThreeOne | PartitionShape::OneThree => 7,
            PartitionShape::TwoOneOne => 10,
            PartitionShape::OneOneOneOne => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_supported_shapes() {
        assert_eq!(
            PartitionShape::from_block_sizes(&[2, 2]),
            Some(PartitionShape::TwoTwo)
        );
        assert_eq!(
            PartitionShape::from_block_sizes(&[3, 1]),
            Some(PartitionShape::ThreeOne)
        );
        assert_eq!(
            PartitionShape::from_block_sizes(&[1, 3]),
            Some(PartitionShape::OneThree)
        );
        assert_eq!(
            PartitionShape::from_block_sizes(&[1, 2, 1]),
            Some(PartitionShape::TwoOneOne)
        );
        assert_eq!(
            PartitionShape::from_block_sizes(&[1, 1, 1, 1]),
            Some(PartitionShape::OneOneOneOne)
        );
    }

    #[test]
    fn block_counts() {
        let counts: Vec<usize> = [
            PartitionShape::TwoTwo,
            PartitionShape::ThreeOne,
            PartitionShape::OneThree,
            PartitionShape::TwoOneOne,
            PartitionShape::OneOneOneOne,
        ]
        .into_iter()
        .map(PartitionShape::block_count)
        .collect();
        assert_eq!(counts, vec![2, 2, 2, 3, 4]);
    }

    #[test]
    fn rejects_monochromatic_and_bad_sums() {
        assert_eq!(PartitionShape::from_block_sizes(&[4]), None);
        assert_eq!(PartitionShape::from_block_sizes(&[2, 1]), None);
        assert_eq!(PartitionShape::from_block_sizes(&[4, 0]), None);
        assert_eq!(PartitionShape::from_block_sizes(&[]), None);
    }
}
