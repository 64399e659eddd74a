use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path().to_owned();
    ErrorResponse::new(StatusCode::NOT_FOUND, format!("No route for {}", path))
        .with_path(path)
        .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed(OriginalUri(uri): OriginalUri) -> Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource",
    )
    .with_path(uri.path())
    .into_response()
}
