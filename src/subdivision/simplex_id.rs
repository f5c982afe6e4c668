//! `SimplexId`: a strong handle for vertices of the subdivided complex
//!
//! Every distinct cross-color combination registered during a run receives a
//! `SimplexId`. Ids are dense and assigned in creation order starting at 0,
//! so an id doubles as the index of the combination's barycenter in the
//! run's barycenter list.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SimplexId(u32);

impl SimplexId {
    /// Creates a `SimplexId` from a raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        SimplexId(raw)
    }

    /// Creates the id for a barycenter-list position.
    ///
    /// Returns `None` when `index` does not fit in the id space.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(SimplexId)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Position of this simplex's barycenter in the barycenter list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SimplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimplexId").field(&self.get()).finish()
    }
}

impl fmt::Display for SimplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
