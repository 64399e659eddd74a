//! JSON body extractor that rejects with `AppError`.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::Json` on the request side.
///
/// A missing content type, malformed JSON or a body of the wrong shape is
/// reported through `AppError::JsonExtractorRejection`, keeping the
/// status axum picks (400, 415 or 422) and the standard error body.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<Product>) -> String {
///     format!("{:?}", payload)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
