//! HTTP surface: score, activity and lab-sync routes plus health and metrics.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::debug_handler;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use wellness_client::DateRange;

use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;
use crate::types::{
    ActivityRequest, ActivityResponse, ApiResponse, LegacyScoreRequest, UserScoreQuery,
    UserScoreRequest,
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ACTIVITY_WINDOW_DAYS: i64 = 7;

pub fn router(state: Arc<AppState>) -> Router {
    let max_body_size = state.settings.max_body_size;
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/metrics", get(metrics_endpoint).fallback(method_not_allowed))
        .route(
            "/calculate-user-score",
            get(calculate_user_score)
                .post(calculate_user_score)
                .fallback(method_not_allowed),
        )
        .route(
            "/calculate-score",
            post(calculate_score).fallback(method_not_allowed),
        )
        .route(
            "/user-activity",
            post(user_activity).fallback(method_not_allowed),
        )
        .route(
            "/sync-lab-results",
            post(sync_lab_results).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .with_state(state)
}

/// Decode a JSON body; an empty body is the default request.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> ServiceResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ServiceError::Validation(format!("invalid JSON body: {e}")))
}

/// First non-blank candidate, else the configured default user.
fn resolve_user(state: &AppState, candidates: [Option<String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .chain(state.settings.default_user_id.clone())
        .find(|id| !id.trim().is_empty())
}

fn cached<T: IntoResponse>(max_age: u32, body: T) -> Response {
    (
        [(header::CACHE_CONTROL, format!("public, max-age={max_age}"))],
        body,
    )
        .into_response()
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(handle) => ([("content-type", "text/plain; version=0.0.4")], handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "success": false, "error": "Method not allowed" })),
    )
        .into_response()
}

#[debug_handler]
async fn calculate_user_score(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserScoreQuery>,
    body: Bytes,
) -> ServiceResult<Response> {
    let request: UserScoreRequest = parse_body(&body)?;
    let user_id = resolve_user(&state, [query.user_id, request.profile_id])
        .ok_or_else(|| ServiceError::Validation("profileId is required".to_string()))?;
    let scores = state.scores()?;
    let score = scores.user_score(&user_id, &request.programs).await;
    Ok(Json(ApiResponse::ok(score)).into_response())
}

#[debug_handler]
async fn calculate_score(State(state): State<Arc<AppState>>, body: Bytes) -> ServiceResult<Response> {
    let request: LegacyScoreRequest = parse_body(&body)?;
    let user_id = resolve_user(&state, [request.user_id, None])
        .ok_or_else(|| ServiceError::Validation("userId is required".to_string()))?;
    if request.force_refresh == Some(true) {
        tracing::debug!(%user_id, "forceRefresh requested; scores are never cached server-side");
    }
    let score = state.scores()?.legacy_score(&user_id).await;
    Ok(cached(3600, Json(ApiResponse::ok(score))))
}

#[debug_handler]
async fn user_activity(State(state): State<Arc<AppState>>, body: Bytes) -> ServiceResult<Response> {
    let request: ActivityRequest = parse_body(&body)?;
    let user_id = resolve_user(&state, [request.user_id, None])
        .ok_or_else(|| ServiceError::Validation("userId is required".to_string()))?;
    let range = DateRange::from_optional(
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        ACTIVITY_WINDOW_DAYS,
    )
    .ok_or_else(|| ServiceError::Validation("startDate and endDate must be YYYY-MM-DD".to_string()))?;
    let data = state.scores()?.daily_activity(&user_id, &range).await;
    Ok(cached(
        1800,
        Json(ActivityResponse {
            success: true,
            data,
            user_id,
        }),
    ))
}

#[debug_handler]
async fn sync_lab_results(State(state): State<Arc<AppState>>) -> ServiceResult<Response> {
    let report = state.lab_sync()?.run().await?;
    Ok(Json(report).into_response())
}
