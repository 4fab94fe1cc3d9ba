//! Business logic powering the palette REST routes: scoring incoming text,
//! generating the palette (with the dynamic fallback), and gallery access.

use std::time::SystemTime;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dao::models::PaletteEntity,
    dto::palette::{
        AnalysisResponse, AnalyzeRequest, EmotionDetails, GalleryResponse, PaletteRecord,
        PreviewRequest, StatsResponse,
    },
    error::ServiceError,
    palette::{PaletteError, PaletteResult, SentimentCategory, fallback::dynamic_palette},
    sentiment::{self, Intensity, SentimentScore},
    state::SharedState,
};

/// Gallery size used when the client does not ask for one.
pub const DEFAULT_GALLERY_SIZE: usize = 50;
/// Description attached to palettes produced by the fallback generator.
pub const FALLBACK_DESCRIPTION: &str = "fallback palette";

/// Score the text, generate its palette and persist the outcome.
pub async fn analyze(
    state: &SharedState,
    request: AnalyzeRequest,
) -> Result<AnalysisResponse, ServiceError> {
    let color_count = resolve_color_count(state, request.color_count)?;
    let score = sentiment::score(request.method, &request.scores)?;
    let category = sentiment::classify(score.polarity);
    let generated = state.generate_palette(category.as_str(), score.confidence, color_count);
    record_analysis(state, request, score, category, generated).await
}

/// Persist the outcome of one analysis, substituting the dynamic fallback
/// palette when the engine returned an error.
async fn record_analysis(
    state: &SharedState,
    request: AnalyzeRequest,
    score: SentimentScore,
    category: SentimentCategory,
    generated: Result<PaletteResult, PaletteError>,
) -> Result<AnalysisResponse, ServiceError> {
    let intensity = Intensity::from_score(score.polarity, score.confidence);
    let text = request.text.trim().to_string();

    let (colors, harmony, emotion_details) = match generated {
        Ok(palette) => {
            let harmony = Some(palette.harmony.to_string());
            let (colors, details) = palette_details(palette, score);
            (colors, harmony, details)
        }
        Err(err) => {
            warn!(error = %err, %category, "palette engine failed; using fallback palette");
            let (colors, details) = fallback_details(state, category, score);
            (colors, None, details)
        }
    };

    let entity = PaletteEntity {
        id: Uuid::new_v4(),
        input_text: text.clone(),
        polarity: score.polarity,
        colors: PaletteEntity::join_colors(&colors),
        analysis_method: request.method.as_str().to_string(),
        confidence: score.confidence,
        sentiment_label: category.label(),
        intensity: intensity.as_str().to_string(),
        emotion: emotion_details.emotion.clone(),
        harmony,
        created_at: SystemTime::now(),
    };
    let id = entity.id;
    state.store().save(entity).await?;

    info!(
        %id,
        %category,
        method = request.method.as_str(),
        confidence = score.confidence,
        colors = colors.len(),
        "palette created"
    );

    Ok(AnalysisResponse {
        id,
        colors,
        polarity: round3(score.polarity),
        sentiment: category.label(),
        confidence: round3(score.confidence),
        method_used: request.method,
        original_text: text,
        intensity,
        emotion_details,
    })
}

/// Generate a palette for a sentiment label without touching storage.
pub fn preview(state: &SharedState, request: PreviewRequest) -> Result<PaletteResult, ServiceError> {
    let color_count = resolve_color_count(state, request.color_count)?;
    let palette = state.generate_palette(&request.sentiment, request.confidence, color_count)?;
    debug!(sentiment = %request.sentiment, harmony = %palette.harmony, "palette previewed");
    Ok(palette)
}

/// Return the most recent palettes, newest first.
pub async fn gallery(
    state: &SharedState,
    limit: Option<usize>,
) -> Result<GalleryResponse, ServiceError> {
    let limit = limit
        .unwrap_or(DEFAULT_GALLERY_SIZE)
        .min(state.config().gallery_limit);
    let palettes: Vec<PaletteRecord> = state
        .store()
        .list_recent(limit)
        .await?
        .into_iter()
        .map(PaletteRecord::from)
        .collect();

    Ok(GalleryResponse {
        total: palettes.len(),
        palettes,
    })
}

/// Fetch one stored palette.
pub async fn get_palette(state: &SharedState, id: Uuid) -> Result<PaletteRecord, ServiceError> {
    state
        .store()
        .find(id)
        .await?
        .map(PaletteRecord::from)
        .ok_or_else(|| ServiceError::NotFound(format!("palette `{id}` not found")))
}

/// Remove a stored palette.
pub async fn delete_palette(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    if !state.store().delete(id).await? {
        return Err(ServiceError::NotFound(format!("palette `{id}` not found")));
    }
    info!(%id, "palette deleted");
    Ok(())
}

/// Aggregate counters over the stored palettes.
pub async fn stats(state: &SharedState) -> Result<StatsResponse, ServiceError> {
    let store = state.store();
    let total_palettes = store.count().await?;
    let by_sentiment = store.count_by_sentiment().await?;

    Ok(StatsResponse {
        total_palettes,
        by_sentiment,
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn resolve_color_count(state: &SharedState, requested: Option<usize>) -> Result<usize, ServiceError> {
    let config = state.config();
    let count = requested.unwrap_or(config.default_color_count);
    if count == 0 || count > config.max_color_count {
        return Err(ServiceError::InvalidInput(format!(
            "color_count must be between 1 and {} (got {count})",
            config.max_color_count
        )));
    }
    Ok(count)
}

fn palette_details(palette: PaletteResult, score: SentimentScore) -> (Vec<String>, EmotionDetails) {
    let details = EmotionDetails {
        emotion: palette.emotion,
        description: palette.description,
        temperature: Some(palette.temperature),
        harmony: Some(palette.harmony),
        mood: Some(palette.mood),
        energy: Some(palette.energy),
        color_meanings: palette.color_meanings,
        analysis: score,
    };
    (palette.colors, details)
}

fn fallback_details(
    state: &SharedState,
    category: SentimentCategory,
    score: SentimentScore,
) -> (Vec<String>, EmotionDetails) {
    let details = EmotionDetails {
        emotion: state.engine().profiles().get(category).name.clone(),
        description: FALLBACK_DESCRIPTION.to_string(),
        temperature: None,
        harmony: None,
        mood: None,
        energy: None,
        color_meanings: Vec::new(),
        analysis: score,
    };
    (dynamic_palette(score.polarity, score.confidence), details)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
