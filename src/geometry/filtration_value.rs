//! Filtration weight of a combination of color blocks.
//!
//! The weight is the mean pairwise distance between the barycenters of the
//! blocks in the combination:
//!
//! - 2 blocks: the distance between the two barycenters.
//! - 3 blocks: the perimeter of the barycenter triangle divided by 3.
//! - 4 blocks: the mean of the 6 pairwise distances.
//!
//! Any other block count has weight `0.0`. Pairs are summed in
//! lexicographic order `(0,1), (0,2), ..., (k-2,k-1)`, so the result is
//! reproducible to the last bit for a given block order.

use crate::geometry::barycenter::barycenter;
use crate::geometry::point::Point3;
use crate::interface_error::InterfaceError;
use itertools::Itertools;

/// Weight of a combination given the barycenter of each of its blocks.
pub fn filtration_value(block_barycenters: &[Point3]) -> f64 {
    match block_barycenters.len() {
        2..=4 => {
            let (sum, pairs) = block_barycenters
                .iter()
                .tuple_combinations()
                .fold((0.0, 0usize), |(sum, pairs), (a, b)| {
                    (sum + a.distance(b), pairs + 1)
                });
            sum / pairs as f64
        }
        _ => 0.0,
    }
}

/// Weight of a combination given as point-index blocks.
///
/// # Errors
/// Propagates [`barycenter`] failures (empty block, index out of range).
pub fn combination_value<B>(points: &[Point3], blocks: &[B]) -> Result<f64, InterfaceError>
where
    B: AsRef<[usize]>,
{
    let centers = blocks
        .iter()
        .map(|block| barycenter(points, block.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(filtration_value(&centers))
}
