//! `SharedPathStore`: read-only registry of patrol paths.
//!
//! Built once (from a loader or by hand), then wrapped in an `Arc` and shared
//! by every controller.  Lookups hand out `Arc<SharedPath>` clones so a
//! controller keeps its path alive even if the store is swapped out by a
//! reload.

use std::sync::Arc;

use pf_core::PathId;

use crate::{PathError, PathResult, SharedPath};

#[cfg(not(feature = "fx-hash"))]
type PathMap = std::collections::HashMap<PathId, Arc<SharedPath>>;

#[cfg(feature = "fx-hash")]
type PathMap = rustc_hash::FxHashMap<PathId, Arc<SharedPath>>;

/// Immutable collection of named paths.
#[derive(Debug, Default)]
pub struct SharedPathStore {
    paths: PathMap,
}

impl SharedPathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-constructed paths.  A later path with the
    /// same id replaces an earlier one.
    pub fn from_paths(paths: impl IntoIterator<Item = SharedPath>) -> Self {
        let mut store = Self::new();
        for path in paths {
            store.insert(path);
        }
        store
    }

    /// Add or replace a path.  Only available before the store is shared.
    pub fn insert(&mut self, path: SharedPath) {
        self.paths.insert(path.id, Arc::new(path));
    }

    /// Resolve `id` to a shared handle.
    ///
    /// # Errors
    ///
    /// [`PathError::PathNotFound`] when no path with that id was loaded.
    pub fn lookup(&self, id: PathId) -> PathResult<Arc<SharedPath>> {
        self.paths
            .get(&id)
            .cloned()
            .ok_or(PathError::PathNotFound(id))
    }

    /// Like [`lookup`][Self::lookup], but also rejects a path with no nodes.
    ///
    /// # Errors
    ///
    /// [`PathError::PathNotFound`] or [`PathError::EmptyPath`].
    pub fn resolve(&self, id: PathId) -> PathResult<Arc<SharedPath>> {
        let path = self.lookup(id)?;
        if path.is_empty() {
            return Err(PathError::EmptyPath(id));
        }
        Ok(path)
    }

    pub fn contains(&self, id: PathId) -> bool {
        self.paths.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Wrap the finished store for sharing across controllers.
    pub fn into_shared(self) -> Arc<SharedPathStore> {
        Arc::new(self)
    }
}
