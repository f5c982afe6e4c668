//! Global identity table for cross-color combinations.
//!
//! A combination is identified by the sorted union of the point indices in
//! its blocks, so `{u}|{x,y}` from one tetrahedron and `{u,x}|{y}` from
//! another denote the same simplex. The first registration of a key fixes
//! its id, filtration value, and barycenter; later registrations return the
//! cached entry untouched.

use crate::debug_invariants::DebugInvariants;
use crate::geometry::barycenter::barycenter;
use crate::geometry::filtration_value::combination_value;
use crate::geometry::point::Point3;
use crate::interface_error::InterfaceError;
use crate::subdivision::simplex_id::SimplexId;
use hashbrown::HashMap;

/// Cached id and filtration value for one identity key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisteredSimplex {
    pub id: SimplexId,
    pub value: f64,
}

/// Result of [`SimplexRegistry::get_or_create`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Registration {
    pub id: SimplexId,
    pub value: f64,
    /// `true` if this call created the entry.
    pub was_new: bool,
}

/// Identity key → simplex table plus the parallel barycenter list.
#[derive(Clone, Debug, Default)]
pub struct SimplexRegistry {
    entries: HashMap<Vec<usize>, RegisteredSimplex>,
    barycenters: Vec<Point3>,
    values: Vec<f64>,
}

/// Sorted union of the point indices across `blocks`.
pub fn identity_key<B>(blocks: &[B]) -> Vec<usize>
where
    B: AsRef<[usize]>,
{
    let mut key: Vec<usize> = blocks
        .iter()
        .flat_map(|b| b.as_ref().iter().copied())
        .collect();
    key.sort_unstable();
    key
}

impl SimplexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the combination's identity key, creating an entry on first
    /// sight.
    ///
    /// A new entry gets the next sequential id, a filtration value computed
    /// from the per-block barycenters, and appends the barycenter of *all*
    /// points in the key to the barycenter list.
    ///
    /// # Errors
    /// Propagates barycenter failures for empty blocks or out-of-range
    /// indices, and [`InterfaceError::SimplexIdOverflow`] if the id space is
    /// exhausted.
    pub fn get_or_create<B>(
        &mut self,
        points: &[Point3],
        blocks: &[B],
    ) -> Result<Registration, InterfaceError>
    where
        B: AsRef<[usize]>,
    {
        let key = identity_key(blocks);
        if let Some(entry) = self.entries.get(&key) {
            log::trace!("registry hit {key:?} -> {}", entry.id);
            return Ok(Registration {
                id: entry.id,
                value: entry.value,
                was_new: false,
            });
        }

        let value = combination_value(points, blocks)?;
        let center = barycenter(points, &key)?;
        let id = SimplexId::from_index(self.barycenters.len())
            .ok_or(InterfaceError::SimplexIdOverflow(self.barycenters.len()))?;
        self.entries.insert(key, RegisteredSimplex { id, value });
        self.barycenters.push(center);
        self.values.push(value);
        Ok(Registration {
            id,
            value,
            was_new: true,
        })
    }

    /// Cached entry for a sorted identity key.
    pub fn get(&self, key: &[usize]) -> Option<RegisteredSimplex> {
        self.entries.get(key).copied()
    }

    /// Cached filtration value for `id`.
    pub fn value(&self, id: SimplexId) -> Option<f64> {
        self.values.get(id.index()).copied()
    }

    /// Number of registered simplices.
    pub fn len(&self) -> usize {
        self.barycenters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barycenters.is_empty()
    }

    /// Barycenters indexed by [`SimplexId::index`].
    pub fn barycenters(&self) -> &[Point3] {
        &self.barycenters
    }

    pub fn into_barycenters(self) -> Vec<Point3> {
        self.barycenters
    }
}

impl DebugInvariants for SimplexRegistry {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SimplexRegistry");
    }

    fn validate_invariants(&self) -> Result<(), InterfaceError> {
        let n = self.barycenters.len();
        if self.entries.len() != n || self.values.len() != n {
            return Err(InterfaceError::InvariantViolation(format!(
                "{} keys, {} barycenters, {} values",
                self.entries.len(),
                n,
                self.values.len()
            )));
        }
        let mut seen = vec![false; n];
        for (key, entry) in &self.entries {
            let slot = seen.get_mut(entry.id.index()).ok_or_else(|| {
                InterfaceError::InvariantViolation(format!("id {} beyond {n} entries", entry.id))
            })?;
            if std::mem::replace(slot, true) {
                return Err(InterfaceError::InvariantViolation(format!(
                    "id {} assigned to more than one key (second: {key:?})",
                    entry.id
                )));
            }
            if self.values[entry.id.index()].to_bits() != entry.value.to_bits() {
                return Err(InterfaceError::InvariantViolation(format!(
                    "value of id {} drifted",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn identity_key_is_sorted_union() {
        assert_eq!(identity_key(&[vec![3, 1], vec![2]]), vec![1, 2, 3]);
        assert_eq!(identity_key::<Vec<usize>>(&[]), Vec::<usize>::new());
    }

    #[test]
    fn first_registration_creates_dense_ids() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        let a = reg.get_or_create(&points, &[vec![0], vec![1]]).unwrap();
        let b = reg.get_or_create(&points, &[vec![0], vec![2]]).unwrap();
        assert!(a.was_new && b.was_new);
        assert_eq!(a.id, SimplexId::new(0));
        assert_eq!(b.id, SimplexId::new(1));
        assert_eq!(a.value, 2.0);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.barycenters()[0], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn same_vertex_set_reuses_entry() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        let first = reg.get_or_create(&points, &[vec![0, 1], vec![2]]).unwrap();
        // Same key, different grouping: first writer wins.
        let again = reg
            .get_or_create(&points, &[vec![2], vec![0], vec![1]])
            .unwrap();
        assert!(!again.was_new);
        assert_eq!(again.id, first.id);
        assert_eq!(again.value, first.value);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.value(first.id), Some(first.value));
        assert_eq!(
            reg.get(&[0, 1, 2]),
            Some(RegisteredSimplex {
                id: first.id,
                value: first.value
            })
        );
    }

    #[test]
    fn barycenter_covers_all_points_of_key() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        reg.get_or_create(&points, &[vec![0, 1], vec![2, 3]]).unwrap();
        assert_eq!(reg.barycenters()[0], Point3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn single_block_has_zero_value() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        let r = reg.get_or_create(&points, &[vec![0, 1, 2]]).unwrap();
        assert_eq!(r.value, 0.0);
    }

    #[test]
    fn failed_registration_leaves_registry_untouched() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        assert!(reg.get_or_create(&points, &[vec![0], vec![9]]).is_err());
        assert!(reg.is_empty());
        assert!(reg.validate_invariants().is_ok());
    }

    #[test]
    fn invariants_hold_after_mixed_traffic() {
        let points = pts();
        let mut reg = SimplexRegistry::new();
        for blocks in [
            vec![vec![0], vec![1]],
            vec![vec![1], vec![0]],
            vec![vec![0, 1], vec![3]],
            vec![vec![0], vec![1], vec![3]],
        ] {
            reg.get_or_create(&points, &blocks).unwrap();
        }
        assert_eq!(reg.len(), 2);
        reg.validate_invariants().unwrap();
        reg.debug_assert_invariants();
    }
}
