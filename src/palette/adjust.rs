//! Confidence-driven saturation adjustment applied after harmony generation.

use super::{PaletteError, codec::adjust_intensity};

/// Below this confidence colors are desaturated.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;
/// Above this confidence colors are intensified.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
/// Saturation multiplier below [`LOW_CONFIDENCE_THRESHOLD`].
pub const DESATURATE_FACTOR: f64 = 0.8;
/// Saturation multiplier above [`HIGH_CONFIDENCE_THRESHOLD`].
pub const INTENSIFY_FACTOR: f64 = 1.1;

/// Saturation multiplier for a confidence level, `None` in the neutral band.
pub fn intensity_factor(confidence: f64) -> Option<f64> {
    if confidence < LOW_CONFIDENCE_THRESHOLD {
        Some(DESATURATE_FACTOR)
    } else if confidence > HIGH_CONFIDENCE_THRESHOLD {
        Some(INTENSIFY_FACTOR)
    } else {
        None
    }
}

/// Scale every color's saturation according to `confidence`, keeping order.
pub fn apply_confidence(colors: Vec<String>, confidence: f64) -> Result<Vec<String>, PaletteError> {
    match intensity_factor(confidence) {
        Some(factor) => colors
            .iter()
            .map(|color| adjust_intensity(color, factor))
            .collect(),
        None => Ok(colors),
    }
}
