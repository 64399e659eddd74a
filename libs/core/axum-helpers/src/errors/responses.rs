//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "error": "Internal Server Error",
        "message": "An internal server error occurred",
        "path": "/products",
        "timestamp": "2025-03-01T10:15:30.123Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body or path",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "error": "Bad Request",
        "message": "Invalid id: abc",
        "path": "/productById/abc",
        "timestamp": "2025-03-01T10:15:30.123Z"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "error": "Not Found",
        "message": "Product not found with id: 99",
        "path": "/productById/99",
        "timestamp": "2025-03-01T10:15:30.123Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
