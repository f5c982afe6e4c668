//! Shape-specific scaffold extension.
//!
//! For one chromatic partition the scaffold builder:
//! 1. lays out the four vertices block by block in template slot order;
//! 2. registers every combination of the shape's template;
//! 3. emits the template's edges and triangles over the registered ids,
//!    weighted by the minimum of their endpoints' values;
//! 4. emits each registered id as a vertex entry with its own value.

use crate::chromatic::partition::{ChromaticPartition, PartitionBlock};
use crate::chromatic::shape::PartitionShape;
use crate::geometry::point::Point3;
use crate::interface_error::InterfaceError;
use crate::subdivision::filtration::{FiltrationAssembler, Simplex};
use crate::subdivision::registry::{Registration, SimplexRegistry};
use crate::subdivision::templates::{ScaffoldTemplate, template_for};
use std::cmp::Reverse;

/// Selects the template for `partition` and the vertex layout its slots
/// refer to.
///
/// A `{1,3}` partition uses the 3-1 template with its blocks swapped. A
/// three-block partition is laid out pair first, keeping the singletons in
/// their given order.
pub fn scaffold_layout(
    partition: &ChromaticPartition,
) -> Result<(&'static ScaffoldTemplate, [usize; 4]), InterfaceError> {
    let mut blocks: Vec<&PartitionBlock> = partition.blocks().iter().collect();
    match partition.shape() {
        PartitionShape::OneThree => blocks.reverse(),
        PartitionShape::TwoOneOne => blocks.sort_by_key(|b| Reverse(b.len())),
        _ => {}
    }
    let ordered: Vec<usize> = blocks
        .iter()
        .flat_map(|b| b.points().iter().copied())
        .collect();
    let slots: [usize; 4] = ordered
        .try_into()
        .map_err(|v: Vec<usize>| InterfaceError::UnsupportedPartitionShape(vec![v.len()]))?;
    Ok((template_for(partition.shape()), slots))
}

/// Registers the combinations of `template` over `slots` and emits its
/// scaffold into `filtration`.
///
/// Returns the registrations in template order. Slots are bounds-checked
/// before anything is registered, so a failed call leaves `registry` and
/// `filtration` as they were.
pub fn extend_scaffold(
    template: &ScaffoldTemplate,
    slots: &[usize; 4],
    points: &[Point3],
    registry: &mut SimplexRegistry,
    filtration: &mut FiltrationAssembler,
) -> Result<Vec<Registration>, InterfaceError> {
    if let Some(&index) = slots.iter().find(|&&i| i >= points.len()) {
        return Err(InterfaceError::PointIndexOutOfRange {
            index,
            len: points.len(),
        });
    }
    let mut registered = Vec::with_capacity(template.combinations.len());
    for combination in template.combinations {
        let blocks: Vec<Vec<usize>> = combination
            .iter()
            .map(|group| group.iter().map(|&slot| slots[slot]).collect())
            .collect();
        registered.push(registry.get_or_create(points, &blocks)?);
    }

    for [i, j] in template.edges() {
        let (a, b) = (&registered[i], &registered[j]);
        filtration.insert(Simplex::from_ids([a.id, b.id]), a.value.min(b.value));
    }
    for &[i, j, k] in template.triangles {
        let (a, b, c) = (&registered[i], &registered[j], &registered[k]);
        filtration.insert(
            Simplex::from_ids([a.id, b.id, c.id]),
            a.value.min(b.value).min(c.value),
        );
    }
    for r in &registered {
        filtration.insert(Simplex::from_ids([r.id]), r.value);
    }
    Ok(registered)
}

/// Dispatches `partition` to its shape's scaffold.
pub fn extend_partition(
    partition: &ChromaticPartition,
    points: &[Point3],
    registry: &mut SimplexRegistry,
    filtration: &mut FiltrationAssembler,
) -> Result<Vec<Registration>, InterfaceError> {
    let (template, slots) = scaffold_layout(partition)?;
    extend_scaffold(template, &slots, points, registry, filtration)
}
