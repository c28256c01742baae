pub mod user_handlers;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use uuid::Uuid;

use crate::error::AppError;

// Ids that are not UUIDs match no user, same as an unknown UUID
pub fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        log::debug!("Rejecting non-UUID user id: {}", raw);
        AppError::NotFound(format!("User not found: {}", raw))
    })
}

// Turn axum's JSON extractor failures into our error body
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
