//! Axum route handlers for the Interview API.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::interview::models::{
    AnswerRequest, AnswerResponse, FinishRequest, FinishResponse, StartRequest, StartResponse,
};
use crate::interview::validation::{validate_answer, validate_session_id, validate_start};
use crate::state::AppState;

/// POST /start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    if state.config.strict_validation {
        validate_start(&req)?;
    }
    Ok(Json(state.interviews.start(req).await?))
}

/// POST /answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    if state.config.strict_validation {
        validate_answer(&req)?;
    }
    Ok(Json(state.interviews.answer(req).await?))
}

/// POST /finish
///
/// The session id may come from the query string (`?sessionId=`) or from a
/// JSON body; the query string wins when both are present.
pub async fn handle_finish(
    State(state): State<AppState>,
    Query(query): Query<FinishRequest>,
    body: Option<Json<FinishRequest>>,
) -> Result<Json<FinishResponse>, AppError> {
    let session_id = query
        .session_id
        .or_else(|| body.and_then(|Json(b)| b.session_id))
        .ok_or_else(|| AppError::Validation("sessionId is required".to_string()))?;

    if state.config.strict_validation {
        validate_session_id(&session_id)?;
    }
    Ok(Json(state.interviews.finish(&session_id).await?))
}
