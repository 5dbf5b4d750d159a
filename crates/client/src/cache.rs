//! Per-collection read cache.
//!
//! Holds the last fetched list for each [`Collection`]. Entries are replaced
//! wholesale; there is no per-row patching and no expiry.
//!
//! Each collection carries a generation that every invalidation bumps. A
//! reader takes the generation before fetching and hands it back to
//! [`CollectionCache::put`]; if a write invalidated the collection while the
//! fetch was in flight, the fetched list is returned but not stored.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::resource::{Collection, Resource};

type Entry = Arc<dyn Any + Send + Sync>;

/// Generation counter for one collection's cache slot.
pub type Generation = u64;

#[derive(Default)]
struct Slot {
    generation: Generation,
    rows: Option<Entry>,
}

#[derive(Default)]
pub struct CollectionCache {
    slots: RwLock<HashMap<Collection, Slot>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list for `T`, if one is held.
    pub async fn get<T: Resource>(&self) -> Option<Arc<Vec<T>>> {
        let slots = self.slots.read().await;
        slots
            .get(&T::COLLECTION)
            .and_then(|slot| slot.rows.clone())
            .and_then(|entry| entry.downcast::<Vec<T>>().ok())
    }

    /// Current generation of `collection`. Read this before fetching.
    pub async fn generation(&self, collection: Collection) -> Generation {
        self.slots
            .read()
            .await
            .get(&collection)
            .map_or(0, |slot| slot.generation)
    }

    /// Store a list fetched at `generation`, replacing any previous one.
    ///
    /// A list fetched before the latest invalidation is stale and is dropped;
    /// the caller still gets it back.
    pub async fn put<T: Resource>(&self, generation: Generation, rows: Vec<T>) -> Arc<Vec<T>> {
        let rows = Arc::new(rows);
        let mut slots = self.slots.write().await;
        let slot = slots.entry(T::COLLECTION).or_default();
        if slot.generation == generation {
            let entry: Entry = rows.clone();
            slot.rows = Some(entry);
        } else {
            tracing::debug!(collection = %T::COLLECTION, "Stale list not cached");
        }
        rows
    }

    pub async fn invalidate(&self, collection: Collection) {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(collection).or_default();
        slot.generation += 1;
        if slot.rows.take().is_some() {
            tracing::debug!(%collection, "Cache entry invalidated");
        }
    }

    pub async fn clear(&self) {
        for slot in self.slots.write().await.values_mut() {
            slot.generation += 1;
            slot.rows = None;
        }
    }
}
