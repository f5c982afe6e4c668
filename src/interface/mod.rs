//! Interface surfaces between colored point sets.
//!
//! The geometric side (Delaunay, regular, or alpha-filtered triangulation)
//! is supplied through [`TetrahedralKernel`]; this module filters the
//! kernel's cells down to the multicolored ones and runs the barycentric
//! subdivision over them.
//!
//! ```rust
//! use chromatic_subdivision::prelude::*;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let colors = vec![0, 0, 1, 1];
//! let kernel = PrecomputedKernel::new(vec![[0, 1, 2, 3]]);
//! let config = ComplexConfig { weighted: false, alpha: false };
//!
//! let surface = InterfaceGenerator::new(kernel)
//!     .compute_interface_surface(&points, &colors, &[], config)?;
//! assert_eq!(surface.vertices.len(), 9);
//! assert_eq!(surface.filtration.len(), 33);
//! # Ok::<(), chromatic_subdivision::interface_error::InterfaceError>(())
//! ```

mod kernel;

pub use kernel::{PrecomputedKernel, TetrahedralKernel};

use crate::chromatic::partition::{Tetrahedron, is_multicolored};
use crate::geometry::point::{Point3, as_flat_coordinates};
use crate::interface_error::InterfaceError;
use crate::subdivision::filtration::FiltrationEntry;
use crate::subdivision::subdivide_and_filter;
use serde::{Deserialize, Serialize};

/// Which triangulation the kernel builds.
///
/// - `weighted = false`: plain Delaunay triangulation (`alpha` is ignored).
/// - `weighted = true, alpha = false`: regular (weighted Delaunay)
///   triangulation with weights `radius²`.
/// - `weighted = true, alpha = true`: weighted alpha complex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexConfig {
    pub weighted: bool,
    pub alpha: bool,
}

impl Default for ComplexConfig {
    fn default() -> Self {
        Self {
            weighted: true,
            alpha: true,
        }
    }
}

impl ComplexConfig {
    pub fn new(weighted: bool, alpha: bool) -> Self {
        Self { weighted, alpha }
    }
}

/// Subdivided interface complex plus the configuration that produced it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSurface {
    /// Barycenter of each registered combination, indexed by simplex id.
    pub vertices: Vec<Point3>,
    /// `(simplex, value)` entries sorted by vertex count, then value.
    pub filtration: Vec<FiltrationEntry>,
    pub weighted: bool,
    pub alpha: bool,
}

impl InterfaceSurface {
    /// Vertex coordinates as a flat `[x0, y0, z0, x1, ...]` slice.
    pub fn vertex_coordinates(&self) -> &[f64] {
        as_flat_coordinates(&self.vertices)
    }

    /// Entries whose simplex has topological dimension `dim`.
    pub fn simplices_of_dimension(&self, dim: usize) -> impl Iterator<Item = &FiltrationEntry> {
        self.filtration
            .iter()
            .filter(move |e| e.simplex.dimension() == dim)
    }
}

/// Builds interface surfaces from colored point clouds with a pluggable
/// triangulation kernel.
#[derive(Clone, Debug, Default)]
pub struct InterfaceGenerator<K> {
    kernel: K,
}

impl<K: TetrahedralKernel> InterfaceGenerator<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Tetrahedra from the kernel spanning at least two colors.
    ///
    /// # Errors
    /// - [`InterfaceError::ColorLabelLengthMismatch`] / [`InterfaceError::RadiiLengthMismatch`]
    ///   for inconsistent input lengths.
    /// - Kernel failures, unchanged.
    /// - [`InterfaceError::PointIndexOutOfRange`] if the kernel returns a cell
    ///   outside the point set.
    pub fn multicolored_tetrahedra(
        &self,
        points: &[Point3],
        color_labels: &[i32],
        radii: &[f64],
        config: ComplexConfig,
    ) -> Result<Vec<Tetrahedron>, InterfaceError> {
        validate_lengths(points, color_labels, radii, config.weighted)?;
        let cells = self.kernel.tetrahedra(points, radii, config)?;
        let total = cells.len();
        let mut kept = Vec::with_capacity(total);
        for tet in cells {
            if is_multicolored(&tet, color_labels)? {
                kept.push(tet);
            } else {
                log::trace!("skipping monochromatic cell {tet:?}");
            }
        }
        log::debug!(
            "kernel produced {total} tetrahedra, {} multicolored ({config:?})",
            kept.len()
        );
        Ok(kept)
    }

    /// Triangulates, filters, and subdivides into an [`InterfaceSurface`].
    pub fn compute_interface_surface(
        &self,
        points: &[Point3],
        color_labels: &[i32],
        radii: &[f64],
        config: ComplexConfig,
    ) -> Result<InterfaceSurface, InterfaceError> {
        let tetrahedra = self.multicolored_tetrahedra(points, color_labels, radii, config)?;
        let (vertices, filtration) = subdivide_and_filter(points, color_labels, &tetrahedra)?;
        Ok(InterfaceSurface {
            vertices,
            filtration,
            weighted: config.weighted,
            alpha: config.alpha,
        })
    }
}

/// One-call pipeline: kernel → multicolored filter → subdivision.
///
/// # Errors
/// - [`InterfaceError::ColorLabelLengthMismatch`] if `points` and
///   `color_labels` differ in length.
/// - [`InterfaceError::RadiiLengthMismatch`] if `weighted` and `radii` does
///   not have one entry per point.
/// - Any kernel or subdivision failure.
pub fn get_barycentric_subdivision_and_filtration<K: TetrahedralKernel>(
    kernel: &K,
    points: &[Point3],
    color_labels: &[i32],
    radii: &[f64],
    weighted: bool,
    alpha: bool,
) -> Result<(Vec<Point3>, Vec<FiltrationEntry>), InterfaceError> {
    let config = ComplexConfig { weighted, alpha };
    let tetrahedra =
        InterfaceGenerator::new(kernel).multicolored_tetrahedra(points, color_labels, radii, config)?;
    subdivide_and_filter(points, color_labels, &tetrahedra)
}

fn validate_lengths(
    points: &[Point3],
    color_labels: &[i32],
    radii: &[f64],
    weighted: bool,
) -> Result<(), InterfaceError> {
    if points.len() != color_labels.len() {
        return Err(InterfaceError::ColorLabelLengthMismatch {
            points: points.len(),
            labels: color_labels.len(),
        });
    }
    if weighted && radii.len() != points.len() {
        return Err(InterfaceError::RadiiLengthMismatch {
            points: points.len(),
            radii: radii.len(),
        });
    }
    Ok(())
}
