//! Loaded-LUT caching and catalog lookup.
//!
//! The pipeline resolves LUT identifiers through the [`LutCatalog`]
//! trait so hosts can plug in their own discovery (directory scans,
//! embedded assets). [`LutCache`] is the standard in-memory
//! implementation: identifier -> (table, last-access time) with an
//! explicit idle-based eviction policy.

use std::collections::HashMap;

use crate::lut::cube::Lut3D;

/// Source of parsed LUT tables, queried by string identifier.
pub trait LutCatalog {
    /// Identifiers currently available, sorted.
    fn list(&self) -> Vec<String>;
    /// Resolve an identifier to a parsed table. `None` means not present;
    /// the pipeline treats that as a non-fatal `LutNotAvailable`.
    fn resolve(&mut self, id: &str) -> Option<&Lut3D>;
}

/// How many accesses an entry may sit unused before eviction.
const DEFAULT_MAX_IDLE: u64 = 64;

struct CacheEntry {
    lut: Lut3D,
    last_used: u64,
}

/// In-memory LUT cache with last-access eviction.
///
/// Every `resolve` call ticks an internal clock; entries whose last
/// access is more than `max_idle` ticks old are dropped on the next
/// insert (or an explicit [`LutCache::evict_idle`]).
pub struct LutCache {
    entries: HashMap<String, CacheEntry>,
    clock: u64,
    max_idle: u64,
}

impl LutCache {
    pub fn new() -> Self {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    pub fn with_max_idle(max_idle: u64) -> Self {
        Self {
            entries: HashMap::new(),
            clock: 0,
            max_idle,
        }
    }

    /// Insert or replace a table. Triggers an eviction sweep.
    pub fn insert(&mut self, id: impl Into<String>, lut: Lut3D) {
        self.clock += 1;
        let last_used = self.clock;
        self.entries.insert(id.into(), CacheEntry { lut, last_used });
        self.evict_idle();
    }

    /// Drop entries that have not been touched within the idle window.
    pub fn evict_idle(&mut self) {
        let clock = self.clock;
        let max_idle = self.max_idle;
        self.entries
            .retain(|_, e| clock.saturating_sub(e.last_used) <= max_idle);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LutCatalog for LutCache {
    fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn resolve(&mut self, id: &str) -> Option<&Lut3D> {
        self.clock += 1;
        let clock = self.clock;
        let entry = self.entries.get_mut(id)?;
        entry.last_used = clock;
        Some(&entry.lut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_hit_and_miss() {
        let mut cache = LutCache::new();
        cache.insert("teal", Lut3D::identity(2));
        assert!(cache.resolve("teal").is_some());
        assert!(cache.resolve("orange").is_none());
    }

    #[test]
    fn list_is_sorted() {
        let mut cache = LutCache::new();
        cache.insert("b", Lut3D::identity(2));
        cache.insert("a", Lut3D::identity(2));
        assert_eq!(cache.list(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn idle_entries_evicted() {
        let mut cache = LutCache::with_max_idle(2);
        cache.insert("old", Lut3D::identity(2));
        // Three misses age the clock past the idle window.
        for _ in 0..3 {
            assert!(cache.resolve("nope").is_none());
        }
        cache.insert("new", Lut3D::identity(2));
        assert!(!cache.contains("old"));
        assert!(cache.contains("new"));
    }

    #[test]
    fn recently_used_entries_survive() {
        let mut cache = LutCache::with_max_idle(2);
        cache.insert("kept", Lut3D::identity(2));
        for _ in 0..10 {
            assert!(cache.resolve("kept").is_some());
        }
        cache.insert("other", Lut3D::identity(2));
        assert!(cache.contains("kept"));
        assert_eq!(cache.len(), 2);
    }
}
