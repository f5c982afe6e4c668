#![cfg_attr(docsrs, feature(doc_cfg))]
//! # chromatic-subdivision
//!
//! chromatic-subdivision builds a filtered simplicial complex describing the
//! interface between differently colored point sets in 3D. Starting from
//! tetrahedra that span at least two colors, it barycentrically subdivides
//! each one along its color classes, weights every cross-color combination
//! by the spread of its block barycenters, and merges the pieces into one
//! deduplicated, ordered filtration suitable as input to persistent homology.
//!
//! ## Features
//! - Chromatic partitioning of tetrahedra into canonical color blocks
//! - Fixed scaffold templates for the 2-2, 3-1, 2-1-1 and 1-1-1-1 shapes
//! - Global identity registry: one id, value and barycenter per vertex set
//! - Deterministic output ordered by simplex size, then filtration value
//! - Pluggable triangulation kernel behind [`interface::TetrahedralKernel`]
//! - Optional `rayon` feature for parallel chromatic partitioning
//!
//! ## Determinism
//!
//! A run is a sequential fold over the input tetrahedra. For a fixed input
//! order the barycenter list, id assignment and filtration are reproduced
//! exactly, with or without the `rayon` feature.
//!
//! ## Usage
//! ```rust
//! use chromatic_subdivision::prelude::*;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let colors = vec![0, 1, 2, 3];
//! let (barycenters, filtration) = subdivide_and_filter(&points, &colors, &[[0, 1, 2, 3]])?;
//! assert_eq!(barycenters.len(), 11);
//! assert_eq!(filtration.len(), 11 + 20 + 12);
//! # Ok::<(), chromatic_subdivision::interface_error::InterfaceError>(())
//! ```
//!
//! Logging goes through the [`log`] facade; install any logger to see
//! per-tetrahedron `debug` and per-run `info` records.

pub mod chromatic;
pub mod debug_invariants;
pub mod geometry;
pub mod interface;
pub mod interface_error;
pub mod subdivision;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::chromatic::{
        ChromaticPartition, PartitionBlock, PartitionShape, Tetrahedron, chromatic_partition,
        is_multicolored,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::Point3;
    pub use crate::interface::{
        ComplexConfig, InterfaceGenerator, InterfaceSurface, PrecomputedKernel, TetrahedralKernel,
        get_barycentric_subdivision_and_filtration,
    };
    pub use crate::interface_error::InterfaceError;
    pub use crate::subdivision::filtration::{FiltrationAssembler, FiltrationEntry};
    pub use crate::subdivision::registry::SimplexRegistry;
    #[cfg(feature = "rayon")]
    pub use crate::subdivision::subdivide_and_filter_par;
    pub use crate::subdivision::{
        BarycentricSubdivision, Simplex, SimplexId, SubdivisionOutput, subdivide_and_filter,
    };
}
