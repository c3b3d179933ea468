//! Optional request validation, applied in front of the interview state machine
//! when `STRICT_VALIDATION` is enabled. With it off every input is accepted as-is.

use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{AnswerRequest, StartRequest};

pub fn validate_start(req: &StartRequest) -> Result<(), AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    Ok(())
}

pub fn validate_answer(req: &AnswerRequest) -> Result<(), AppError> {
    validate_session_id(&req.session_id)?;
    if req.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }
    Ok(())
}

/// Session ids are always issued as UUIDs; anything else cannot be live.
pub fn validate_session_id(session_id: &str) -> Result<(), AppError> {
    Uuid::parse_str(session_id)
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("malformed sessionId '{session_id}'")))
}
