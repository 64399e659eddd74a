//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a single `i32` path parameter.
///
/// Anything that does not parse as an `i32` is rejected with
/// `400 Bad Request` in the standard error shape.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/productById/{id}", get(get_product));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.trim()
            .parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        response::IntoResponse,
        routing::get,
    };
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> impl IntoResponse {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/items/{id}", get(echo))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_id() {
        assert_eq!(status_for("/items/42").await, StatusCode::OK);
        assert_eq!(status_for("/items/-3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        assert_eq!(status_for("/items/abc").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_overflowing_id_is_bad_request() {
        assert_eq!(status_for("/items/99999999999").await, StatusCode::BAD_REQUEST);
    }
}
