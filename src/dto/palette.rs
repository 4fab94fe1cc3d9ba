//! DTO definitions used by the palette REST API and documentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::PaletteEntity,
    dto::{
        format_system_time,
        validation::{validate_scores, validate_text},
    },
    palette::{Energy, HarmonyScheme, Temperature},
    sentiment::{AnalysisMethod, AnalyzerScores, Intensity, SentimentScore},
};

/// Text to analyze together with the analyzer outputs computed for it.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AnalyzeRequest {
    /// Input text, trimmed before storage.
    #[validate(custom(function = "validate_text"))]
    pub text: String,
    #[serde(default)]
    pub method: AnalysisMethod,
    #[serde(default)]
    #[validate(custom(function = "validate_scores"))]
    pub scores: AnalyzerScores,
    /// Number of colors; defaults to the configured palette size.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub color_count: Option<usize>,
}

/// Generate a palette straight from a sentiment label without persisting it.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PreviewRequest {
    /// Sentiment label such as `"very positive"` or `"slightly_negative"`.
    #[validate(length(max = 64))]
    pub sentiment: String,
    /// Clamped into `[0.3, 1.0]` by the engine.
    pub confidence: f64,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub color_count: Option<usize>,
}

/// Descriptive metadata attached to an analysis.
///
/// Palette-specific fields are absent when the fallback palette was used.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmotionDetails {
    pub emotion: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony: Option<HarmonyScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color_meanings: Vec<String>,
    /// Raw scoring outcome the palette was derived from.
    pub analysis: SentimentScore,
}

/// Response returned once a text has been analyzed and its palette stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub colors: Vec<String>,
    /// Polarity rounded to three decimals.
    pub polarity: f64,
    /// Sentiment label with spaces (e.g. "slightly positive").
    pub sentiment: String,
    /// Confidence rounded to three decimals.
    pub confidence: f64,
    pub method_used: AnalysisMethod,
    pub original_text: String,
    pub intensity: Intensity,
    pub emotion_details: EmotionDetails,
}

/// Gallery query parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GalleryQuery {
    /// Maximum number of palettes to return (default 50, capped by configuration).
    pub limit: Option<usize>,
}

/// Stored palette as exposed through the gallery.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteRecord {
    pub id: Uuid,
    pub input_text: String,
    pub colors: Vec<String>,
    pub polarity: f64,
    pub confidence: f64,
    pub analysis_method: String,
    pub sentiment_label: String,
    pub intensity: String,
    pub emotion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<PaletteEntity> for PaletteRecord {
    fn from(entity: PaletteEntity) -> Self {
        Self {
            colors: entity.color_list(),
            created_at: format_system_time(entity.created_at),
            id: entity.id,
            input_text: entity.input_text,
            polarity: entity.polarity,
            confidence: entity.confidence,
            analysis_method: entity.analysis_method,
            sentiment_label: entity.sentiment_label,
            intensity: entity.intensity,
            emotion: entity.emotion,
            harmony: entity.harmony,
        }
    }
}

/// Most recent palettes, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryResponse {
    pub total: usize,
    pub palettes: Vec<PaletteRecord>,
}

/// Aggregate counters over the stored palettes.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_palettes: usize,
    /// Number of palettes per sentiment label.
    pub by_sentiment: BTreeMap<String, usize>,
    pub api_version: String,
}
