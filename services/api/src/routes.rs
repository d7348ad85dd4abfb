use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use palindrome::error::AppError;
use palindrome::{CheckVerdict, PalindromeChecker};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

const CHECK_FORM: &str = include_str!("assets/index.html");

#[derive(Debug, Deserialize)]
pub(crate) struct CheckRequest {
    /// A missing or `null` value is validated as empty text.
    #[serde(default)]
    pub(crate) text: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckResponse {
    pub(crate) text: String,
    pub(crate) is_palindrome: bool,
    pub(crate) verdict: CheckVerdict,
    pub(crate) message: &'static str,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(check_form))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/palindrome/check", post(check_endpoint))
}

pub(crate) async fn check_form() -> Html<&'static str> {
    Html(CHECK_FORM)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn check_endpoint(
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let checker = PalindromeChecker::new();
    let text = payload.text.unwrap_or_default();

    checker.validate(&text)?;
    let verdict = CheckVerdict::from(checker.is_palindrome_async(text.as_str()).await);

    info!(?verdict, input_chars = text.chars().count(), "palindrome check served");

    Ok(Json(CheckResponse {
        text,
        is_palindrome: verdict.is_palindrome(),
        verdict,
        message: verdict.message(),
    }))
}
