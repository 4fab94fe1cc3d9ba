//! Entry point turning a sentiment category and confidence into a palette.

use std::sync::LazyLock;

use rand::Rng;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use super::{
    PaletteError,
    adjust::apply_confidence,
    codec::{hsl_to_hex, wrap_hue},
    describe::{color_meanings, describe_palette},
    harmony::HarmonyScheme,
    profile::{EmotionProfile, Energy, ProfileTable, SentimentCategory, Temperature},
};

/// Number of colors produced when the caller does not ask for a specific count.
pub const DEFAULT_COLOR_COUNT: usize = 5;
/// Lowest confidence factor the engine works with.
pub const MIN_CONFIDENCE: f64 = 0.3;
/// Highest confidence factor the engine works with.
pub const MAX_CONFIDENCE: f64 = 1.0;
/// Maximum random offset (degrees) applied to the sampled base hue.
const BASE_HUE_JITTER: f64 = 15.0;

static DEFAULT_ENGINE: LazyLock<PaletteEngine> = LazyLock::new(PaletteEngine::default);

/// Generated palette plus the descriptive metadata derived from its profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaletteResult {
    /// Lowercase `#rrggbb` colors, in generation order.
    pub colors: Vec<String>,
    /// Display name of the emotion profile.
    pub emotion: String,
    pub temperature: Temperature,
    pub energy: Energy,
    pub harmony: HarmonyScheme,
    pub mood: String,
    /// Confidence factor actually used, within `[0.3, 1.0]`.
    pub confidence: f64,
    pub description: String,
    /// One meaning per entry of `colors`, same order.
    pub color_meanings: Vec<String>,
}

/// Palette generator bound to a profile table.
#[derive(Debug, Clone, Default)]
pub struct PaletteEngine {
    profiles: ProfileTable,
}

impl PaletteEngine {
    pub fn new(profiles: ProfileTable) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Build a palette for `sentiment`.
    ///
    /// Unknown sentiments use the neutral profile and `confidence` is clamped
    /// into `[0.3, 1.0]`. All randomness comes from `rng`, so a seeded source
    /// yields a reproducible result.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sentiment: &str,
        confidence: f64,
        color_count: usize,
        rng: &mut R,
    ) -> Result<PaletteResult, PaletteError> {
        if color_count == 0 {
            return Err(PaletteError::InvalidArgument(
                "color count must be at least 1".into(),
            ));
        }

        let (category, profile) = self.profiles.lookup(sentiment);
        let confidence = clamp_confidence(confidence);

        let colors = render(profile, confidence, color_count, rng);
        let colors = apply_confidence(colors, confidence)?;
        let description = describe_palette(profile, confidence, rng);
        let color_meanings = color_meanings(&colors, rng)?;

        debug!(
            %category,
            harmony = %profile.harmony,
            confidence,
            colors = colors.len(),
            "generated palette"
        );

        Ok(PaletteResult {
            colors,
            emotion: profile.name.clone(),
            temperature: profile.temperature,
            energy: profile.energy,
            harmony: profile.harmony,
            mood: profile.mood.clone(),
            confidence,
            description,
            color_meanings,
        })
    }

    /// Same as [`PaletteEngine::generate`] with an already-resolved category.
    pub fn generate_for<R: Rng + ?Sized>(
        &self,
        category: SentimentCategory,
        confidence: f64,
        color_count: usize,
        rng: &mut R,
    ) -> Result<PaletteResult, PaletteError> {
        self.generate(category.as_str(), confidence, color_count, rng)
    }
}

/// Generate a palette with the built-in profile table.
pub fn generate_advanced_palette<R: Rng + ?Sized>(
    sentiment: &str,
    confidence: f64,
    color_count: usize,
    rng: &mut R,
) -> Result<PaletteResult, PaletteError> {
    DEFAULT_ENGINE.generate(sentiment, confidence, color_count, rng)
}

/// Clamp into `[0.3, 1.0]`. NaN maps to the lower bound.
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return MIN_CONFIDENCE;
    }
    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Pick one of the profile's candidate hues and jitter it by up to ±15°.
pub fn sample_base_hue<R: Rng + ?Sized>(profile: &EmotionProfile, rng: &mut R) -> f64 {
    let candidate = profile.candidate_hues[rng.random_range(0..profile.candidate_hues.len())];
    wrap_hue(candidate + rng.random_range(-BASE_HUE_JITTER..=BASE_HUE_JITTER))
}

/// Harmony colors before the confidence adjustment.
fn render<R: Rng + ?Sized>(
    profile: &EmotionProfile,
    confidence: f64,
    color_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let base_hue = sample_base_hue(profile, rng);
    profile
        .harmony
        .generate(base_hue, profile, confidence, color_count, rng)
        .into_iter()
        .map(|hsl| hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness))
        .collect()
}
