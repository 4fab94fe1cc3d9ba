//! In-process palette store backed by a concurrent map.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use futures::future::{BoxFuture, FutureExt, ready};
use tracing::debug;
use uuid::Uuid;

use super::PaletteStore;
use crate::dao::{
    models::PaletteEntity,
    storage::{StorageError, StorageResult},
};

/// [`PaletteStore`] keeping every palette in memory. Cloning shares the map.
///
/// An optional capacity bounds the map: saving into a full store evicts the
/// oldest palettes first.
#[derive(Debug, Clone, Default)]
pub struct MemoryPaletteStore {
    palettes: Arc<DashMap<Uuid, PaletteEntity>>,
    capacity: Option<usize>,
}

impl MemoryPaletteStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `capacity` palettes (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            palettes: Arc::default(),
            capacity: Some(capacity.max(1)),
        }
    }

    fn evict_oldest(&self) -> bool {
        let oldest = self
            .palettes
            .iter()
            .min_by_key(|entry| entry.created_at)
            .map(|entry| *entry.key());
        match oldest {
            Some(id) => {
                self.palettes.remove(&id);
                debug!(%id, "evicted oldest palette");
                true
            }
            None => false,
        }
    }
}

impl PaletteStore for MemoryPaletteStore {
    fn save(&self, palette: PaletteEntity) -> BoxFuture<'static, StorageResult<()>> {
        if self.palettes.contains_key(&palette.id) {
            return ready(Err(StorageError::Duplicate(palette.id))).boxed();
        }
        if let Some(capacity) = self.capacity {
            while self.palettes.len() >= capacity && self.evict_oldest() {}
        }

        let result = match self.palettes.entry(palette.id) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(palette.id)),
            Entry::Vacant(slot) => {
                debug!(id = %palette.id, "stored palette");
                slot.insert(palette);
                Ok(())
            }
        };
        ready(result).boxed()
    }

    fn find(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PaletteEntity>>> {
        let found = self.palettes.get(&id).map(|entry| entry.value().clone());
        ready(Ok(found)).boxed()
    }

    fn list_recent(&self, limit: usize) -> BoxFuture<'static, StorageResult<Vec<PaletteEntity>>> {
        let mut palettes: Vec<PaletteEntity> = self
            .palettes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        palettes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        palettes.truncate(limit);
        ready(Ok(palettes)).boxed()
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.palettes.remove(&id).is_some();
        ready(Ok(removed)).boxed()
    }

    fn count(&self) -> BoxFuture<'static, StorageResult<usize>> {
        ready(Ok(self.palettes.len())).boxed()
    }

    fn count_by_sentiment(&self) -> BoxFuture<'static, StorageResult<BTreeMap<String, usize>>> {
        let mut counts = BTreeMap::new();
        for entry in self.palettes.iter() {
            *counts.entry(entry.sentiment_label.clone()).or_insert(0) += 1;
        }
        ready(Ok(counts)).boxed()
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        ready(Ok(())).boxed()
    }
}
