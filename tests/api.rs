use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use emotion_palette_back::{
    config::AppConfig, dao::palette_store::MemoryPaletteStore, routes, state::AppState,
};

fn app(seed: Option<u64>) -> Router {
    let mut config = AppConfig::default();
    config.seed = seed;
    routes::router(AppState::new(config, Arc::new(MemoryPaletteStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn analysis(text: &str, textblob: f64, vader: f64) -> Value {
    json!({
        "text": text,
        "method": "hybrid",
        "scores": {
            "textblob": { "polarity": textblob, "subjectivity": 0.4 },
            "vader": { "compound": vader }
        }
    })
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let app = app(None);
    let (status, body) = send(&app, get("/healthcheck")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_a_stored_palette() {
    let app = app(None);
    let (status, body) = send(
        &app,
        post("/palettes", analysis("I feel absolutely fantastic today", 0.8, 0.9)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "very positive");
    assert_eq!(body["method_used"], "hybrid");
    assert_eq!(body["intensity"], "very_high");
    assert_eq!(body["colors"].as_array().unwrap().len(), 5);
    assert_eq!(body["emotion_details"]["harmony"], "complementary");
    assert_eq!(body["emotion_details"]["temperature"], "warm");
    assert_eq!(
        body["emotion_details"]["color_meanings"]
            .as_array()
            .unwrap()
            .len(),
        5
    );

    let id = body["id"].as_str().unwrap();
    let (status, stored) = send(&app, get(&format!("/palettes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["colors"], body["colors"]);
    assert_eq!(stored["harmony"], "complementary");
}

#[tokio::test]
async fn analyze_honours_color_count_and_single_method() {
    let app = app(None);
    let (status, body) = send(
        &app,
        post(
            "/palettes",
            json!({
                "text": "rain again, nothing to do",
                "method": "vader",
                "scores": { "vader": { "compound": -0.45 } },
                "color_count": 3
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "negative");
    assert_eq!(body["confidence"], 0.45);
    assert_eq!(body["colors"].as_array().unwrap().len(), 3);
    assert_eq!(body["emotion_details"]["harmony"], "monochromatic");
}

#[tokio::test]
async fn invalid_requests_are_rejected() {
    let app = app(None);

    let (status, body) = send(&app, post("/palettes", analysis("   ", 0.1, 0.1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("text"));

    let mut zero = analysis("hello world", 0.1, 0.1);
    zero["color_count"] = json!(0);
    let (status, _) = send(&app, post("/palettes", zero)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut too_many = analysis("hello world", 0.1, 0.1);
    too_many["color_count"] = json!(500);
    let (status, body) = send(&app, post("/palettes", too_many)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("color_count"));

    let (status, body) = send(
        &app,
        post(
            "/palettes",
            json!({ "text": "hello world", "scores": { "vader": { "compound": 0.2 } } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("textblob"));

    let (status, _) = send(&app, post("/palettes", analysis("hello world", 3.0, 0.1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_bodies_use_the_json_error_shape() {
    let app = app(None);

    let response = app
        .clone()
        .oneshot(post("/palettes", analysis("   ", 0.1, 0.1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let malformed = Request::builder()
        .method("POST")
        .uri("/palettes/preview")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn preview_is_reproducible_with_a_seed() {
    let app = app(Some(99));
    let request = || {
        post(
            "/palettes/preview",
            json!({ "sentiment": "Slightly Positive", "confidence": 0.65, "color_count": 6 }),
        )
    };

    let (status, first) = send(&app, request()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, request()).await;
    assert_eq!(first, second);
    assert_eq!(first["harmony"], "analogous");
    assert_eq!(first["colors"].as_array().unwrap().len(), 6);

    let (_, gallery) = send(&app, get("/palettes")).await;
    assert_eq!(gallery["total"], 0);
}

#[tokio::test]
async fn preview_falls_back_to_neutral_and_clamps_confidence() {
    let app = app(Some(5));
    let (status, body) = send(
        &app,
        post(
            "/palettes/preview",
            json!({ "sentiment": "totally_unknown_key", "confidence": 4.2 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "Balance");
    assert_eq!(body["harmony"], "tetradic");
    assert_eq!(body["confidence"], 1.0);
}

#[tokio::test]
async fn gallery_lists_newest_first_with_limit() {
    let app = app(None);
    let mut ids = Vec::new();
    for text in ["first entry", "second entry", "third entry"] {
        let (_, body) = send(&app, post("/palettes", analysis(text, 0.0, 0.0))).await;
        ids.push(body["id"].as_str().unwrap().to_string());
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let (status, body) = send(&app, get("/palettes?limit=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["palettes"][0]["id"], ids[2].as_str());
    assert_eq!(body["palettes"][1]["input_text"], "second entry");

    let (_, everything) = send(&app, get("/palettes")).await;
    assert_eq!(everything["total"], 3);
}

#[tokio::test]
async fn delete_removes_the_palette() {
    let app = app(None);
    let (_, body) = send(&app, post("/palettes", analysis("gone soon", -0.2, -0.3))).await;
    let uri = format!("/palettes/{}", body["id"].as_str().unwrap());

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("not found"));

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_count_palettes_per_sentiment() {
    let app = app(None);
    send(&app, post("/palettes", analysis("lovely lovely day", 0.9, 0.9))).await;
    send(&app, post("/palettes", analysis("so very nice", 0.9, 0.9))).await;
    send(&app, post("/palettes", analysis("it is what it is", 0.0, 0.0))).await;

    let (status, body) = send(&app, get("/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_palettes"], 3);
    assert_eq!(body["by_sentiment"]["very positive"], 2);
    assert_eq!(body["by_sentiment"]["neutral"], 1);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app(None);
    let (status, body) = send(&app, get("/api-doc/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/palettes"].is_object());
    assert!(body["paths"]["/palettes/{id}"].is_object());
}
