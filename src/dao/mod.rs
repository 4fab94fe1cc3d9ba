/// Database model definitions.
pub mod models;
/// Palette storage and retrieval operations.
pub mod palette_store;
/// Storage abstraction layer for database operations.
pub mod storage;
