//! In-memory TTL cache for the popular-materials list.

use std::time::{Duration, Instant};

use parking_lot::RwLock;

use matex_core::constants::DEFAULT_CACHE_TTL_SECONDS;
use matex_core::types::ProjectedMaterial;

/// Cached aggregate with its capture time.
#[derive(Clone)]
struct CacheSlot {
    materials: Vec<ProjectedMaterial>,
    fetched_at: Instant,
}

/// Single-slot cache for the popular-materials aggregate.
///
/// Thread-safe. At most one entry exists at a time; a successful refresh
/// overwrites it, and an expired entry is never removed, only distrusted —
/// reads past the TTL behave as a miss until the next store.
pub struct PopularCache {
    slot: RwLock<Option<CacheSlot>>,
    ttl: Duration,
}

impl PopularCache {
    /// Creates a cache with the default one-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS))
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Returns the cached list if a slot exists and is younger than the TTL.
    pub fn get(&self) -> Option<Vec<ProjectedMaterial>> {
        let slot = self.slot.read();
        slot.as_ref().and_then(|s| {
            if s.fetched_at.elapsed() < self.ttl {
                Some(s.materials.clone())
            } else {
                None
            }
        })
    }

    /// Overwrites the slot with a freshly fetched list, stamped now.
    pub fn store(&self, materials: Vec<ProjectedMaterial>) {
        *self.slot.write() = Some(CacheSlot {
            materials,
            fetched_at: Instant::now(),
        });
    }

    /// Empties the slot.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Age of the current slot, fresh or stale. `None` when nothing has
    /// been stored yet.
    pub fn age(&self) -> Option<Duration> {
        self.slot.read().as_ref().map(|s| s.fetched_at.elapsed())
    }

    /// The configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for PopularCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_materials(ids: &[&str]) -> Vec<ProjectedMaterial> {
        ids.iter()
            .map(|id| ProjectedMaterial {
                material_id: Some((*id).into()),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = PopularCache::new();
        assert!(cache.get().is_none());
        assert!(cache.age().is_none());
    }

    #[test]
    fn test_store_then_hit() {
        let cache = PopularCache::new();
        let materials = make_materials(&["mp-149", "mp-2534"]);
        cache.store(materials.clone());
        assert_eq!(cache.get().unwrap(), materials);
    }

    #[test]
    fn test_store_overwrites() {
        let cache = PopularCache::new();
        cache.store(make_materials(&["mp-149"]));
        cache.store(make_materials(&["mp-2534"]));
        let cached = cache.get().unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].material_id.as_deref(), Some("mp-2534"));
    }

    #[test]
    fn test_ttl_expiration_is_a_miss() {
        let cache = PopularCache::with_ttl(Duration::from_millis(1));
        cache.store(make_materials(&["mp-149"]));
        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_stale_slot_is_kept_not_deleted() {
        let cache = PopularCache::with_ttl(Duration::from_millis(1));
        cache.store(make_materials(&["mp-149"]));
        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.get().is_none());
        // The slot still exists; only its freshness is gone.
        assert!(cache.age().unwrap() >= Duration::from_millis(1));
    }

    #[test]
    fn test_clear() {
        let cache = PopularCache::new();
        cache.store(make_materials(&["mp-149"]));
        cache.clear();
        assert!(cache.get().is_none());
        assert!(cache.age().is_none());
    }
}
