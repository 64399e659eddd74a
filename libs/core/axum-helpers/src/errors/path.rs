use axum::{
    extract::{OriginalUri, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fills in `ErrorResponse::path` with the path of the failed request.
///
/// Handlers return `AppError` without knowing where they are mounted; this
/// middleware looks for the `ErrorResponse` left in the response extensions
/// and re-renders the body with the request path.
///
/// ```ignore
/// Router::new()
///     .route("/productById/{id}", get(get_by_id))
///     .layer(axum::middleware::from_fn(attach_request_path))
/// ```
pub async fn attach_request_path(request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.path().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    match response.extensions().get::<ErrorResponse>() {
        Some(error) if error.path.is_empty() => error.clone().with_path(path).into_response(),
        _ => response,
    }
}
