/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Palette analysis, preview and gallery logic.
pub mod palette_service;
