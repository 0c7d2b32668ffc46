use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::messages};
use thiserror::Error;

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const PURCHASED_FLAG_REQUIRED: &str = "isPurchased status is required";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ItemError {
    /// Validation failure for an add request lacking a required field
    pub fn missing_fields() -> Self {
        ItemError::Validation(messages::VALIDATION_FAILED.to_string())
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
