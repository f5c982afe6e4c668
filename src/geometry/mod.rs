//! Geometry utilities for chromatic-subdivision.
//!
//! This is the only place coordinates enter the engine: barycenters of point
//! subsets and the distance-based filtration weight of a block combination.

pub mod barycenter;
pub mod filtration_value;
pub mod point;

pub use barycenter::barycenter;
pub use filtration_value::{combination_value, filtration_value};
pub use point::{Point3, as_flat_coordinates};
