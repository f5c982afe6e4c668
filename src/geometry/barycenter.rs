//! Barycenters of indexed point subsets.

use crate::geometry::point::Point3;
use crate::interface_error::InterfaceError;

/// Arithmetic mean of `points[i]` over `indices`.
///
/// # Errors
/// - [`InterfaceError::EmptyPointSet`] if `indices` is empty.
/// - [`InterfaceError::PointIndexOutOfRange`] for an index past `points.len()`.
pub fn barycenter(points: &[Point3], indices: &[usize]) -> Result<Point3, InterfaceError> {
    if indices.is_empty() {
        return Err(InterfaceError::EmptyPointSet);
    }
    let mut sum = Point3::ZERO;
    for &i in indices {
        sum += *points.get(i).ok_or(InterfaceError::PointIndexOutOfRange {
            index: i,
            len: points.len(),
        })?;
    }
    Ok(sum / indices.len() as f64)
}
