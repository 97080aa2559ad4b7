//! Memoization for acronym-aware case conversion.
//!
//! A [`CaseCache`] maps a raw input to its converted form, separately for
//! each [`CaseStyle`]. It is meant to live for one generator run and be
//! shared (usually behind an `Arc`) by every thread converting names.
//!
//! Lookups take the read lock; a miss releases it, the caller computes the
//! value unlocked, then inserts under the write lock. Two threads racing on
//! the same key both compute the same deterministic value, so the last
//! insert wins without any observable difference.
//!
//! ```rust
//! use strmangle_case::{CaseCache, CaseStyle};
//!
//! let cache = CaseCache::new();
//! let value = cache.get_or_insert_with(CaseStyle::Title, "user_id", || "UserID".to_string());
//! assert_eq!(value, "UserID");
//! assert!(cache.contains(CaseStyle::Title, "user_id"));
//! assert!(!cache.contains(CaseStyle::Camel, "user_id"));
//!
//! cache.clear();
//! assert!(cache.is_empty());
//! ```

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// The conversion an entry was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// `TitleCase` output.
    Title,
    /// `camelCase` output.
    Camel,
}

/// Statistics for a [`CaseCache`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that had to compute.
    pub misses: u64,
    /// Number of entries currently cached.
    pub cached_count: usize,
}

impl CacheStats {
    /// Get the cache hit rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
struct Entries {
    title: HashMap<String, String>,
    camel: HashMap<String, String>,
}

impl Entries {
    fn map(&self, style: CaseStyle) -> &HashMap<String, String> {
        match style {
            CaseStyle::Title => &self.title,
            CaseStyle::Camel => &self.camel,
        }
    }

    fn map_mut(&mut self, style: CaseStyle) -> &mut HashMap<String, String> {
        match style {
            CaseStyle::Title => &mut self.title,
            CaseStyle::Camel => &mut self.camel,
        }
    }

    fn len(&self) -> usize {
        self.title.len() + self.camel.len()
    }
}

/// A grow-only conversion cache guarded by a read-preferring lock.
#[derive(Debug, Default)]
pub struct CaseCache {
    entries: RwLock<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CaseCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed value.
    pub fn get(&self, style: CaseStyle, raw: &str) -> Option<String> {
        self.entries.read().map(style).get(raw).cloned()
    }

    /// Return the cached value for `raw`, computing and storing it on a miss.
    ///
    /// `compute` runs without holding any lock.
    pub fn get_or_insert_with<F>(&self, style: CaseStyle, raw: &str, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(value) = self.get(style, raw) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute();
        tracing::trace!(?style, raw, converted = %value, "Case cache miss");

        self.entries
            .write()
            .map_mut(style)
            .insert(raw.to_owned(), value.clone());

        value
    }

    /// Check if a value is cached.
    pub fn contains(&self, style: CaseStyle, raw: &str) -> bool {
        self.entries.read().map(style).contains_key(raw)
    }

    /// Drop every entry and reset the statistics.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let dropped = entries.len();
        *entries = Entries::default();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        tracing::debug!(dropped, "Cleared case cache");
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            cached_count: self.len(),
        }
    }

    /// Get the number of cached entries across all styles.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
