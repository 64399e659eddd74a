use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Carries the full client-facing message, e.g. "Product not found with id: 7"
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("CSV export error: {0}")]
    Export(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn not_found_by_id(id: i32) -> Self {
        ProductError::NotFound(format!("Product not found with id: {}", id))
    }

    pub fn not_found_by_name(name: &str) -> Self {
        ProductError::NotFound(format!("Product not found with name: {}", name))
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(msg) => AppError::NotFound(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
            ProductError::Export(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<csv::Error> for ProductError {
    fn from(err: csv::Error) -> Self {
        ProductError::Export(err.to_string())
    }
}
