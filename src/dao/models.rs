use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Separator used when flattening a palette's colors into a single column.
pub const COLOR_SEPARATOR: char = ',';

/// Flattened projection of a generated palette as persisted by storage backends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteEntity {
    /// Stable identifier for the palette.
    pub id: Uuid,
    /// Text the palette was generated from.
    pub input_text: String,
    /// Combined polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Hex colors joined with [`COLOR_SEPARATOR`].
    pub colors: String,
    /// Analyzer combination used to score the text.
    pub analysis_method: String,
    /// Confidence reported by the scoring step.
    pub confidence: f64,
    /// Sentiment label with spaces (e.g. "slightly positive").
    pub sentiment_label: String,
    /// Intensity grade of the sentiment.
    pub intensity: String,
    /// Emotion profile name, or the fallback marker.
    pub emotion: String,
    /// Harmony scheme used, absent for fallback palettes.
    pub harmony: Option<String>,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

impl PaletteEntity {
    /// Join colors into the stored column format.
    pub fn join_colors(colors: &[String]) -> String {
        colors.join(&COLOR_SEPARATOR.to_string())
    }

    /// Split the stored column back into individual colors.
    pub fn color_list(&self) -> Vec<String> {
        self.colors
            .split(COLOR_SEPARATOR)
            .filter(|color| !color.is_empty())
            .map(str::to_string)
            .collect()
    }
}
