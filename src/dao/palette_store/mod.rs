pub mod memory;

use std::collections::BTreeMap;

use crate::dao::models::PaletteEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;
use uuid::Uuid;

pub use self::memory::MemoryPaletteStore;

/// Abstraction over the persistence layer for generated palettes.
pub trait PaletteStore: Send + Sync {
    fn save(&self, palette: PaletteEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn find(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PaletteEntity>>>;
    /// Most recent palettes first, at most `limit` entries.
    fn list_recent(&self, limit: usize) -> BoxFuture<'static, StorageResult<Vec<PaletteEntity>>>;
    /// Remove a palette, returning whether it existed.
    fn delete(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    fn count(&self) -> BoxFuture<'static, StorageResult<usize>>;
    fn count_by_sentiment(&self) -> BoxFuture<'static, StorageResult<BTreeMap<String, usize>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
