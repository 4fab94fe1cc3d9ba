use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the emotion palette backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::palettes::analyze,
        crate::routes::palettes::preview,
        crate::routes::palettes::gallery,
        crate::routes::palettes::get_palette,
        crate::routes::palettes::delete_palette,
        crate::routes::palettes::stats,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::palette::AnalyzeRequest,
            crate::dto::palette::PreviewRequest,
            crate::dto::palette::AnalysisResponse,
            crate::dto::palette::EmotionDetails,
            crate::dto::palette::PaletteRecord,
            crate::dto::palette::GalleryResponse,
            crate::dto::palette::StatsResponse,
            crate::palette::PaletteResult,
            crate::palette::HarmonyScheme,
            crate::palette::Temperature,
            crate::palette::Energy,
            crate::sentiment::AnalysisMethod,
            crate::sentiment::AnalyzerScores,
            crate::sentiment::TextBlobScore,
            crate::sentiment::VaderScore,
            crate::sentiment::SentimentScore,
            crate::sentiment::Intensity,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "palettes", description = "Sentiment analysis and palette generation"),
    )
)]
pub struct ApiDoc;
