use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::BuildHasher,
};

/// Read-only view of the caller's "recently copied" flags, keyed by the
/// code block id string (see [`BlockId`](super::BlockId)).
///
/// The engine never writes copy state; flipping and expiring the flag is the
/// caller's job.
pub trait CopyState {
    fn is_copied(&self, id: &str) -> bool;
}

/// Copy state for callers that never show a copied marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCopies;

impl CopyState for NoCopies {
    fn is_copied(&self, _id: &str) -> bool {
        false
    }
}

impl<S: BuildHasher> CopyState for HashMap<String, bool, S> {
    fn is_copied(&self, id: &str) -> bool {
        self.get(id).copied().unwrap_or(false)
    }
}

impl CopyState for BTreeMap<String, bool> {
    fn is_copied(&self, id: &str) -> bool {
        self.get(id).copied().unwrap_or(false)
    }
}

impl<S: BuildHasher> CopyState for HashSet<String, S> {
    fn is_copied(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl<T: CopyState + ?Sized> CopyState for &T {
    fn is_copied(&self, id: &str) -> bool {
        (**self).is_copied(id)
    }
}
