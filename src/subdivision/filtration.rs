//! Deduplicated accumulation and ordering of filtration entries.
//!
//! Entries are keyed on the simplex alone; the value is stored alongside it.
//! A simplex's value is a function of its registered ids (minimum of their
//! cached values), so re-emitting the same simplex from another tetrahedron
//! never changes it.

use crate::subdivision::simplex_id::SimplexId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Sorted, non-empty set of registered ids: a vertex, edge, or triangle of
/// the subdivided complex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Simplex(Vec<SimplexId>);

impl Simplex {
    /// Builds a simplex from ids in any order.
    pub fn from_ids(ids: impl IntoIterator<Item = SimplexId>) -> Self {
        let mut ids: Vec<SimplexId> = ids.into_iter().collect();
        ids.sort_unstable();
        Simplex(ids)
    }

    pub fn ids(&self) -> &[SimplexId] {
        &self.0
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Topological dimension (`len - 1`).
    pub fn dimension(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// A simplex with its filtration value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiltrationEntry {
    pub simplex: Simplex,
    pub value: f64,
}

/// Set of filtration entries accumulated over a run.
#[derive(Clone, Debug, Default)]
pub struct FiltrationAssembler {
    entries: BTreeMap<Simplex, f64>,
}

impl FiltrationAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `simplex` with `value`; returns `false` if it was already
    /// present, in which case the stored value is kept.
    pub fn insert(&mut self, simplex: Simplex, value: f64) -> bool {
        match self.entries.entry(simplex) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(slot) => {
                if slot.get().to_bits() != value.to_bits() {
                    log::warn!(
                        "simplex {:?} re-emitted with value {value}, keeping {}",
                        slot.key(),
                        slot.get()
                    );
                }
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn value_of(&self, simplex: &Simplex) -> Option<f64> {
        self.entries.get(simplex).copied()
    }

    /// Stored simplices in id-lexicographic order.
    pub fn simplices(&self) -> impl Iterator<Item = (&Simplex, f64)> {
        self.entries.iter().map(|(s, v)| (s, *v))
    }

    /// Number of stored simplices with `len` vertices.
    pub fn count_with_len(&self, len: usize) -> usize {
        self.entries.keys().filter(|s| s.len() == len).count()
    }

    /// Entries ordered by vertex count, then by value.
    ///
    /// Entries tied on both keys stay in id-lexicographic order, so the
    /// output is deterministic for a given run.
    pub fn assemble(&self) -> Vec<FiltrationEntry> {
        let mut out: Vec<FiltrationEntry> = self
            .entries
            .iter()
            .map(|(simplex, &value)| FiltrationEntry {
                simplex: simplex.clone(),
                value,
            })
            .collect();
        out.sort_by(|a, b| {
            a.simplex
                .len()
                .cmp(&b.simplex.len())
                .then_with(|| a.value.total_cmp(&b.value))
        });
        out
    }
}
