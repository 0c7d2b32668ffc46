//! Response envelope shared by every mutating endpoint.
//!
//! Successful responses carry `success: "y"` plus either `data` or a
//! `message`; failures are rendered by [`crate::errors::AppError`] with
//! `success: "n"`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success discriminator, serialized as `"y"` / `"n"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Outcome {
    #[serde(rename = "y")]
    Success,
    #[serde(rename = "n")]
    Failure,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// JSON envelope: `{ success, data?, message? }`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: Outcome::Success,
            data: Some(data),
            message: None,
        }
    }

    /// Pair the envelope with a status code other than 200.
    pub fn with_status(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

impl ApiResponse<()> {
    /// Successful envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: Outcome::Success,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
