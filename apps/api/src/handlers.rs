use arena_core::AppError;

use crate::error::ApiError;

pub mod access;
pub mod health;
pub mod teams;

/// Answers requests that passed the route guard but match no handler.
pub async fn not_found_handler() -> ApiError {
    ApiError(AppError::NotFound("no such resource".to_owned()))
}
