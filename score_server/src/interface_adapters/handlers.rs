use crate::domain::errors::ScoreError;
use crate::interface_adapters::protocol::{
    ErrorResponse, HealthResponse, ScoreItemDto, SubmitScoreRequest, SubmitScoreResponse,
    TopScoresQuery, TopScoresResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::submit_score::SubmitScoreUseCase;
use crate::use_cases::top_scores::TopScoresUseCase;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

// Handler for recording a finished run.
pub async fn submit_score(
    State(state): State<AppState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<SubmitScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SubmitScoreUseCase {
        store: state.store.clone(),
    };

    let result = use_case
        .execute(&payload.name, payload.time_ms)
        .await
        .map_err(map_score_error)?;

    Ok(Json(SubmitScoreResponse { id: result.id }))
}

// Handler for reading the fastest runs.
pub async fn top_scores(
    State(state): State<AppState>,
    Query(query): Query<TopScoresQuery>,
) -> Result<Json<TopScoresResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = TopScoresUseCase {
        store: state.store.clone(),
    };

    let records = use_case.execute(query.limit).await.map_err(map_score_error)?;

    Ok(Json(TopScoresResponse {
        items: records.iter().map(ScoreItemDto::from).collect(),
    }))
}

// Handler for the storage health probe.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { ok: true })),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            (StatusCode::BAD_GATEWAY, Json(HealthResponse { ok: false }))
        }
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses.
fn map_score_error(err: ScoreError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ScoreError::InvalidName => error_response(StatusCode::BAD_REQUEST, "name is required"),
        ScoreError::InvalidTime => {
            error_response(StatusCode::BAD_REQUEST, "time_ms must be positive")
        }
        ScoreError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
