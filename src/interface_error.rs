//! InterfaceError: Unified error type for chromatic-subdivision public APIs
//!
//! Every malformed or precondition-violating input is reported through this
//! type; nothing in the library panics on bad input. Failures of an external
//! geometric kernel are carried unchanged in [`InterfaceError::Kernel`].

use thiserror::Error;

/// Unified error type for subdivision and interface operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterfaceError {
    /// `points` and `color_labels` must have one entry per point.
    #[error("each point must have a corresponding color label: {points} points, {labels} labels")]
    ColorLabelLengthMismatch { points: usize, labels: usize },
    /// Weighted complexes need one radius per point.
    #[error("each point must have an assigned radius for weighted complexes: {points} points, {radii} radii")]
    RadiiLengthMismatch { points: usize, radii: usize },
    /// A tetrahedron referenced a point index outside the point set.
    #[error("point index {index} out of range for {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },
    /// A tetrahedron repeated one of its vertices.
    #[error("tetrahedron {0:?} repeats a vertex")]
    DuplicateTetrahedronVertex([usize; 4]),
    /// A tetrahedron spans a single color and has no interface to subdivide.
    #[error("tetrahedron {tetrahedron:?} is monochromatic (color {color})")]
    MonochromaticTetrahedron { tetrahedron: [usize; 4], color: i32 },
    /// Block sizes that are not one of {2,2}, {3,1}, {1,3}, {2,1,1}, {1,1,1,1}.
    #[error("unsupported chromatic partition shape {0:?}")]
    UnsupportedPartitionShape(Vec<usize>),
    /// Partition blocks overlap, are empty, or do not cover four points.
    #[error("malformed chromatic partition: {0}")]
    MalformedPartition(String),
    /// Barycenter requested for an empty index set.
    #[error("barycenter of an empty point set is undefined")]
    EmptyPointSet,
    /// More distinct simplices than a `SimplexId` can address.
    #[error("simplex id space exhausted after {0} simplices")]
    SimplexIdOverflow(usize),
    /// A run-state invariant failed to hold.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Opaque failure reported by the geometric kernel.
    #[error("geometric kernel failure: {0}")]
    Kernel(String),
}

impl InterfaceError {
    /// Returns `true` for the malformed-input class of errors.
    ///
    /// Kernel failures and internal invariant violations are the only
    /// variants outside this class.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            InterfaceError::Kernel(_) | InterfaceError::InvariantViolation(_)
        )
    }
}
