//! Per-zoom-level gradient memoization.
//!
//! Gradient resources are expensive on real backends, so the star reuses
//! them while the zoom level is stable. Keys are quantized (rounded
//! scale × 100, floor 1) to bound the number of distinct entries, and the
//! cache is LRU-bounded so a session that sweeps through many zoom levels
//! cannot grow it without limit.

use crate::renderer::surface::{GradientId, ViewTag};

/// Maximum retained zoom levels per gradient kind.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Quantize a camera scale into a cache key.
pub fn zoom_key(scale: f32) -> u32 {
    ((scale * 100.0).round() as i64).max(1) as u32
}

/// LRU map from (view, quantized zoom) to a gradient handle.
///
/// Keys carry the view because gradient handles are owned by the surface
/// that created them; the top and side surfaces each get their own entry.
/// Small and flat: a Vec scan beats a hash map at this size.
#[derive(Debug, Clone)]
pub struct GradientCache {
    entries: Vec<((ViewTag, u32), GradientId)>,
    capacity: usize,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    /// Look up the gradient for (view, scale), building it on a miss.
    /// Hits refresh recency; a miss past capacity evicts the least
    /// recently used entry.
    pub fn get_or_insert_with(
        &mut self,
        view: ViewTag,
        scale: f32,
        build: impl FnOnce() -> GradientId,
    ) -> GradientId {
        let key = (view, zoom_key(scale));
        if let Some(idx) = self.entries.iter().position(|(k, _)| *k == key) {
            let entry = self.entries.remove(idx);
            let id = entry.1;
            self.entries.push(entry);
            return id;
        }
        let id = build();
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push((key, id));
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, view: ViewTag, scale: f32) -> bool {
        let key = (view, zoom_key(scale));
        self.entries.iter().any(|(k, _)| *k == key)
    }
}

impl Default for GradientCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_quantizes_and_floors() {
        assert_eq!(zoom_key(1.0), 100);
        assert_eq!(zoom_key(1.004), 100);
        assert_eq!(zoom_key(1.006), 101);
        // Floor of 1 even for degenerate scales
        assert_eq!(zoom_key(0.0), 1);
        assert_eq!(zoom_key(0.001), 1);
    }

    #[test]
    fn hit_does_not_rebuild() {
        let mut cache = GradientCache::new();
        let mut builds = 0;
        for _ in 0..5 {
            cache.get_or_insert_with(ViewTag::Top, 1.0, || {
                builds += 1;
                GradientId(7)
            });
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn views_get_distinct_entries() {
        let mut cache = GradientCache::new();
        cache.get_or_insert_with(ViewTag::Top, 1.0, || GradientId(0));
        cache.get_or_insert_with(ViewTag::Side, 1.0, || GradientId(1));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = GradientCache::with_capacity(2);
        cache.get_or_insert_with(ViewTag::Top, 1.0, || GradientId(0));
        cache.get_or_insert_with(ViewTag::Top, 2.0, || GradientId(1));
        // Touch the first entry so 2.0 becomes the LRU
        cache.get_or_insert_with(ViewTag::Top, 1.0, || unreachable!());
        cache.get_or_insert_with(ViewTag::Top, 3.0, || GradientId(2));
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(ViewTag::Top, 1.0));
        assert!(cache.contains(ViewTag::Top, 3.0));
        assert!(!cache.contains(ViewTag::Top, 2.0));
    }
}
