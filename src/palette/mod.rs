//! Sentiment-driven palette generation.
//!
//! [`PaletteEngine::generate`] looks up the [`EmotionProfile`] for a sentiment,
//! runs the profile's [`HarmonyScheme`], adjusts intensity by confidence and
//! attaches a description plus per-color meanings.

pub mod adjust;
pub mod codec;
pub mod describe;
pub mod engine;
pub mod fallback;
pub mod harmony;
pub mod interval;
pub mod profile;

use thiserror::Error;

pub use self::engine::{
    DEFAULT_COLOR_COUNT, PaletteEngine, PaletteResult, clamp_confidence, generate_advanced_palette,
};
pub use self::harmony::HarmonyScheme;
pub use self::profile::{EmotionProfile, Energy, ProfileTable, SentimentCategory, Temperature};

/// Failures raised by the palette engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A caller-supplied argument is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A color string is not `#rrggbb`.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),
    /// A profile or scheme name does not match anything the engine knows.
    #[error("configuration error: {0}")]
    Configuration(String),
}
