use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::palette::{
        AnalysisResponse, AnalyzeRequest, GalleryQuery, GalleryResponse, PaletteRecord,
        PreviewRequest, StatsResponse,
    },
    error::AppError,
    palette::PaletteResult,
    routes::extract::ValidJson,
    services::palette_service,
    state::SharedState,
};

/// Palette analysis, preview and gallery endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/palettes", get(gallery).post(analyze))
        .route("/palettes/preview", post(preview))
        .route("/palettes/{id}", get(get_palette).delete(delete_palette))
        .route("/stats", get(stats))
}

/// Analyze a text from its analyzer scores, generate a palette and store it.
#[utoipa::path(
    post,
    path = "/palettes",
    tag = "palettes",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Palette generated and stored", body = AnalysisResponse),
        (status = 400, description = "Invalid text, scores or color count")
    )
)]
pub async fn analyze(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    Ok(Json(palette_service::analyze(&state, payload).await?))
}

/// Generate a palette for a sentiment label without persisting it.
#[utoipa::path(
    post,
    path = "/palettes/preview",
    tag = "palettes",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Generated palette", body = PaletteResult),
        (status = 400, description = "Invalid color count")
    )
)]
pub async fn preview(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<PreviewRequest>,
) -> Result<Json<PaletteResult>, AppError> {
    Ok(Json(palette_service::preview(&state, payload)?))
}

/// List the most recent palettes.
#[utoipa::path(
    get,
    path = "/palettes",
    tag = "palettes",
    params(GalleryQuery),
    responses((status = 200, description = "Most recent palettes, newest first", body = GalleryResponse))
)]
pub async fn gallery(
    State(state): State<SharedState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>, AppError> {
    Ok(Json(palette_service::gallery(&state, query.limit).await?))
}

/// Retrieve a stored palette by its ID.
#[utoipa::path(
    get,
    path = "/palettes/{id}",
    tag = "palettes",
    params(("id" = String, Path, description = "Identifier of the palette to retrieve")),
    responses(
        (status = 200, description = "Stored palette", body = PaletteRecord),
        (status = 404, description = "Palette not found")
    )
)]
pub async fn get_palette(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaletteRecord>, AppError> {
    Ok(Json(palette_service::get_palette(&state, id).await?))
}

/// Delete a stored palette by its identifier.
#[utoipa::path(
    delete,
    path = "/palettes/{id}",
    tag = "palettes",
    params(("id" = String, Path, description = "Identifier of the palette to delete")),
    responses(
        (status = 204, description = "Palette deleted"),
        (status = 404, description = "Palette not found")
    )
)]
pub async fn delete_palette(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    palette_service::delete_palette(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate counters over the stored palettes.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "palettes",
    responses((status = 200, description = "Palette statistics", body = StatsResponse))
)]
pub async fn stats(State(state): State<SharedState>) -> Result<Json<StatsResponse>, AppError> {
    Ok(Json(palette_service::stats(&state).await?))
}
