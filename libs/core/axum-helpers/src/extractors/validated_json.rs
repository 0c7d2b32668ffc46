//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::{Body, to_bytes},
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Same ceiling as axum's default body limit.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// JSON extractor with automatic validation.
///
/// An empty body is read as `{}`, so a request without a payload reaches the
/// handler with every optional field unset. Body parse failures and
/// `Validate` failures both become 400 responses with the standard error
/// body; validation failures list the offending fields in `details`.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(required, length(min = 1))]
///     item_name: Option<String>,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating: {:?}", payload.item_name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;

        let extracted = if bytes.iter().all(u8::is_ascii_whitespace) {
            Json::<T>::from_bytes(b"{}")
        } else {
            Json::<T>::from_request(Request::from_parts(parts, Body::from(bytes)), state).await
        };
        let Json(data) = extracted.map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
