//! Barycentric subdivision of heterogeneous tetrahedra and filtration
//! assembly.
//!
//! # Expected invariants
//! - Every tetrahedron spans at least two colors; monochromatic cells are
//!   rejected with [`InterfaceError::MonochromaticTetrahedron`].
//! - A combination's identity is the sorted set of its point indices. The
//!   first tetrahedron that introduces a combination fixes its id, value,
//!   and barycenter for the rest of the run.
//! - Ids are dense: the barycenter list has exactly one point per id, and
//!   `barycenters[id.index()]` is that combination's barycenter.
//! - Filtration entries only reference registered ids; each simplex appears
//!   once.
//!
//! Processing is a sequential fold over the input tetrahedra, so the output
//! (including id assignment) is fully determined by the input order.

pub mod filtration;
pub mod registry;
pub mod scaffold;
pub mod simplex_id;
pub mod templates;

use crate::chromatic::partition::{ChromaticPartition, Tetrahedron, chromatic_partition};
use crate::chromatic::shape::PartitionShape;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::point::Point3;
use crate::interface_error::InterfaceError;
use filtration::{FiltrationAssembler, FiltrationEntry};
use itertools::Itertools;
use registry::SimplexRegistry;
use scaffold::extend_partition;

pub use filtration::Simplex;
pub use simplex_id::SimplexId;

/// Barycenters (indexed by [`SimplexId::index`]) and the ordered filtration.
pub type SubdivisionOutput = (Vec<Point3>, Vec<FiltrationEntry>);

/// Run state for one subdivision: the registry, barycenter list, and
/// filtration set threaded through every processed tetrahedron.
#[derive(Clone, Debug)]
pub struct BarycentricSubdivision<'a> {
    points: &'a [Point3],
    color_labels: &'a [i32],
    registry: SimplexRegistry,
    filtration: FiltrationAssembler,
    processed: usize,
}

impl<'a> BarycentricSubdivision<'a> {
    /// Starts a run over `points` colored by `color_labels`.
    ///
    /// # Errors
    /// [`InterfaceError::ColorLabelLengthMismatch`] if the lengths differ.
    pub fn new(points: &'a [Point3], color_labels: &'a [i32]) -> Result<Self, InterfaceError> {
        if points.len() != color_labels.len() {
            return Err(InterfaceError::ColorLabelLengthMismatch {
                points: points.len(),
                labels: color_labels.len(),
            });
        }
        Ok(Self {
            points,
            color_labels,
            registry: SimplexRegistry::new(),
            filtration: FiltrationAssembler::new(),
            processed: 0,
        })
    }

    /// Chromatic partition of `tet` under this run's colors.
    pub fn chromatic_partition(&self, tet: &Tetrahedron) -> Result<ChromaticPartition, InterfaceError> {
        chromatic_partition(tet, self.color_labels)
    }

    /// Partitions `tet` by color and extends the complex with its scaffold.
    ///
    /// # Errors
    /// Out-of-range or repeated indices, and monochromatic tetrahedra.
    pub fn process_tetrahedron(&mut self, tet: &Tetrahedron) -> Result<PartitionShape, InterfaceError> {
        let partition = self.chromatic_partition(tet)?;
        self.process_partition(&partition)?;
        Ok(partition.shape())
    }

    /// Extends the complex with the scaffold of an already computed partition.
    ///
    /// # Errors
    /// - [`InterfaceError::PointIndexOutOfRange`] for a point without a label.
    /// - [`InterfaceError::MonochromaticTetrahedron`] if this run's labels give
    ///   the four points one color.
    /// - [`InterfaceError::MalformedPartition`] if a block's color disagrees
    ///   with the labels of its points, or two blocks share a color.
    ///
    /// On error the run state is unchanged.
    pub fn process_partition(&mut self, partition: &ChromaticPartition) -> Result<(), InterfaceError> {
        check_partition_colors(partition, self.color_labels)?;
        let registered = extend_partition(
            partition,
            self.points,
            &mut self.registry,
            &mut self.filtration,
        )?;
        self.processed += 1;
        log::debug!(
            "scaffold {:?} over {:?}: {} new of {} combinations",
            partition.shape(),
            partition.blocks().iter().map(|b| b.points()).collect::<Vec<_>>(),
            registered.iter().filter(|r| r.was_new).count(),
            registered.len()
        );
        Ok(())
    }

    pub fn registry(&self) -> &SimplexRegistry {
        &self.registry
    }

    pub fn filtration_set(&self) -> &FiltrationAssembler {
        &self.filtration
    }

    /// Barycenters registered so far, indexed by id.
    pub fn barycenters(&self) -> &[Point3] {
        self.registry.barycenters()
    }

    /// Number of tetrahedra processed.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Current filtration in output order.
    pub fn filtration(&self) -> Vec<FiltrationEntry> {
        self.filtration.assemble()
    }

    /// Ends the run, returning barycenters and the ordered filtration.
    pub fn finish(self) -> SubdivisionOutput {
        self.debug_assert_invariants();
        log::info!(
            "subdivided {} tetrahedra into {} barycenters and {} filtration entries",
            self.processed,
            self.registry.len(),
            self.filtration.len()
        );
        let filtration = self.filtration.assemble();
        (self.registry.into_barycenters(), filtration)
    }
}

/// Checks a partition's blocks against the run's color labels.
fn check_partition_colors(
    partition: &ChromaticPartition,
    color_labels: &[i32],
) -> Result<(), InterfaceError> {
    let mut tet: Tetrahedron = [0; 4];
    let mut labels = [0i32; 4];
    let points = partition.blocks().iter().flat_map(|b| b.points().iter().copied());
    for ((slot, label), p) in tet.iter_mut().zip(labels.iter_mut()).zip(points) {
        *slot = p;
        *label = *color_labels
            .get(p)
            .ok_or(InterfaceError::PointIndexOutOfRange {
                index: p,
                len: color_labels.len(),
            })?;
    }
    if labels.iter().all_equal() {
        return Err(InterfaceError::MonochromaticTetrahedron {
            tetrahedron: tet,
            color: labels[0],
        });
    }
    for block in partition.blocks() {
        if let Some(&p) = block.points().iter().find(|&&p| color_labels[p] != block.color()) {
            return Err(InterfaceError::MalformedPartition(format!(
                "point {p} has color {}, block claims {}",
                color_labels[p],
                block.color()
            )));
        }
    }
    let colors = partition.blocks().iter().map(|b| b.color()).unique().count();
    if colors != partition.shape().block_count() {
        return Err(InterfaceError::MalformedPartition(format!(
            "{} blocks carry only {colors} colors",
            partition.shape().block_count()
        )));
    }
    Ok(())
}

impl DebugInvariants for BarycentricSubdivision<'_> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BarycentricSubdivision");
    }

    fn validate_invariants(&self) -> Result<(), InterfaceError> {
        self.registry.validate_invariants()?;
        for index in 0..self.registry.len() {
            let vertex = SimplexId::from_index(index).map(|id| Simplex::from_ids([id]));
            if vertex.and_then(|v| self.filtration.value_of(&v)).is_none() {
                return Err(InterfaceError::InvariantViolation(format!(
                    "registered id {index} has no vertex entry"
                )));
            }
        }
        for (simplex, value) in self.filtration.simplices() {
            if simplex.is_empty() || simplex.len() > 3 {
                return Err(InterfaceError::InvariantViolation(format!(
                    "simplex {simplex:?} has {} vertices",
                    simplex.len()
                )));
            }
            let mut min = f64::INFINITY;
            for &id in simplex.ids() {
                let v = self.registry.value(id).ok_or_else(|| {
                    InterfaceError::InvariantViolation(format!("unregistered id {id} in {simplex:?}"))
                })?;
                min = min.min(v);
            }
            if min.to_bits() != value.to_bits() {
                return Err(InterfaceError::InvariantViolation(format!(
                    "simplex {simplex:?} carries {value}, expected {min}"
                )));
            }
        }
        Ok(())
    }
}

/// Subdivides every tetrahedron and assembles the global filtration.
///
/// Returns the barycenter of each registered combination (indexed by id) and
/// the filtration sorted by vertex count, then value.
///
/// # Errors
/// - [`InterfaceError::ColorLabelLengthMismatch`] if `points` and
///   `color_labels` differ in length.
/// - [`InterfaceError::PointIndexOutOfRange`],
///   [`InterfaceError::DuplicateTetrahedronVertex`], or
///   [`InterfaceError::MonochromaticTetrahedron`] for a malformed tetrahedron.
pub fn subdivide_and_filter(
    points: &[Point3],
    color_labels: &[i32],
    tetrahedra: &[Tetrahedron],
) -> Result<SubdivisionOutput, InterfaceError> {
    let mut run = BarycentricSubdivision::new(points, color_labels)?;
    for tet in tetrahedra {
        run.process_tetrahedron(tet)?;
    }
    Ok(run.finish())
}

/// [`subdivide_and_filter`] with chromatic partitioning computed in parallel.
///
/// Registration stays a sequential fold in input order, so the output is
/// identical to the serial version.
#[cfg(feature = "rayon")]
pub fn subdivide_and_filter_par(
    points: &[Point3],
    color_labels: &[i32],
    tetrahedra: &[Tetrahedron],
) -> Result<SubdivisionOutput, InterfaceError> {
    use rayon::prelude::*;

    let mut run = BarycentricSubdivision::new(points, color_labels)?;
    let partitions = tetrahedra
        .par_iter()
        .map(|tet| chromatic_partition(tet, color_labels))
        .collect::<Result<Vec<_>, _>>()?;
    for partition in &partitions {
        run.process_partition(partition)?;
    }
    Ok(run.finish())
}
