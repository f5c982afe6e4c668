//! Color-based grouping of tetrahedron vertices.

pub mod partition;
pub mod shape;

pub use partition::{
    ChromaticPartition, PartitionBlock, Tetrahedron, chromatic_partition, is_multicolored,
};
pub use shape::PartitionShape;
