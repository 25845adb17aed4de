//! Build-scoped registry of referenced icons
//!
//! The collector is filled by module transforms and drained by sprite
//! assembly. It is an explicit value owned by a build, not a global: clear it
//! (or start a new [`BuildSession`](crate::BuildSession)) at the beginning of
//! every build so registrations never leak between builds.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::icon::{IconPair, registry_key};

type IconMap = IndexMap<String, IconPair, FxBuildHasher>;

/// Insertion-ordered, deduplicating set of icon pairs
///
/// Cloning is cheap and every clone shares the same storage.
#[derive(Debug, Clone, Default)]
pub struct IconCollector {
    inner: Arc<RwLock<IconMap>>,
}

impl IconCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair; returns `true` if it was not seen before
    pub fn add(&self, library: &str, export_name: &str) -> bool {
        let key = registry_key(library, export_name);
        if self.inner.read().contains_key(&key) {
            return false;
        }

        let mut icons = self.inner.write();
        if icons.contains_key(&key) {
            return false;
        }
        icons.insert(key, IconPair::new(library, export_name));
        true
    }

    /// Register pairs in iteration order
    pub fn extend<'p>(&self, pairs: impl IntoIterator<Item = &'p IconPair>) {
        let mut icons = self.inner.write();
        for pair in pairs {
            icons.entry(pair.key()).or_insert_with(|| pair.clone());
        }
    }

    /// Unique pairs in first-seen order
    pub fn to_list(&self) -> Vec<IconPair> {
        self.inner.read().values().cloned().collect()
    }

    pub fn contains(&self, library: &str, export_name: &str) -> bool {
        self.inner
            .read()
            .contains_key(&registry_key(library, export_name))
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
