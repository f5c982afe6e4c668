//! Boundary to the geometric triangulation kernel.

use crate::chromatic::partition::Tetrahedron;
use crate::geometry::point::Point3;
use crate::interface::ComplexConfig;
use crate::interface_error::InterfaceError;

/// Produces the tetrahedral cells of a (weighted / alpha-filtered) Delaunay
/// complex over `points`.
///
/// Implementations report their own failures (degenerate or duplicate
/// coordinates, predicate failures) as [`InterfaceError::Kernel`]. Cells may
/// be monochromatic; callers filter them.
pub trait TetrahedralKernel {
    fn tetrahedra(
        &self,
        points: &[Point3],
        radii: &[f64],
        config: ComplexConfig,
    ) -> Result<Vec<Tetrahedron>, InterfaceError>;
}

impl<K: TetrahedralKernel + ?Sized> TetrahedralKernel for &K {
    fn tetrahedra(
        &self,
        points: &[Point3],
        radii: &[f64],
        config: ComplexConfig,
    ) -> Result<Vec<Tetrahedron>, InterfaceError> {
        (**self).tetrahedra(points, radii, config)
    }
}

/// Kernel returning a fixed cell list, for triangulations computed elsewhere.
///
/// The configuration is ignored; every cell is checked against the point
/// set size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrecomputedKernel {
    cells: Vec<Tetrahedron>,
}

impl PrecomputedKernel {
    pub fn new(cells: Vec<Tetrahedron>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Tetrahedron] {
        &self.cells
    }
}

impl TetrahedralKernel for PrecomputedKernel {
    fn tetrahedra(
        &self,
        points: &[Point3],
        _radii: &[f64],
        _config: ComplexConfig,
    ) -> Result<Vec<Tetrahedron>, InterfaceError> {
        if let Some(&index) = self.cells.iter().flatten().find(|&&i| i >= points.len()) {
            return Err(InterfaceError::PointIndexOutOfRange {
                index,
                len: points.len(),
            });
        }
        Ok(self.cells.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_cells_are_bounds_checked() {
        let kernel = PrecomputedKernel::new(vec![[0, 1, 2, 3]]);
        let pts = [Point3::ZERO; 3];
        assert_eq!(
            kernel.tetrahedra(&pts, &[], ComplexConfig::default()),
            Err(InterfaceError::PointIndexOutOfRange { index: 3, len: 3 })
        );
        let pts = [Point3::ZERO; 4];
        assert_eq!(
            kernel.tetrahedra(&pts, &[], ComplexConfig::default()).unwrap(),
            vec![[0, 1, 2, 3]]
        );
    }
}
