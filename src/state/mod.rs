use std::sync::Arc;

use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::{
    config::AppConfig,
    dao::palette_store::PaletteStore,
    palette::{PaletteEngine, PaletteError, PaletteResult},
};

pub type SharedState = Arc<AppState>;

/// Central application state: configuration, the palette engine and the storage backend.
pub struct AppState {
    config: AppConfig,
    engine: PaletteEngine,
    store: Arc<dyn PaletteStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, store: Arc<dyn PaletteStore>) -> SharedState {
        let engine = config.engine();
        Arc::new(Self {
            config,
            engine,
            store,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn engine(&self) -> &PaletteEngine {
        &self.engine
    }

    /// Handle to the palette store.
    pub fn store(&self) -> Arc<dyn PaletteStore> {
        Arc::clone(&self.store)
    }

    /// Generate a palette with the configured engine.
    ///
    /// With a configured seed every call starts from the same [`StdRng`]
    /// state; otherwise the thread-local generator is used.
    pub fn generate_palette(
        &self,
        sentiment: &str,
        confidence: f64,
        color_count: usize,
    ) -> Result<PaletteResult, PaletteError> {
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.generate_with(sentiment, confidence, color_count, &mut rng)
            }
            None => self.generate_with(sentiment, confidence, color_count, &mut rand::rng()),
        }
    }

    fn generate_with(
        &self,
        sentiment: &str,
        confidence: f64,
        color_count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<PaletteResult, PaletteError> {
        self.engine.generate(sentiment, confidence, color_count, rng)
    }
}
