//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with `AppError`, so malformed input produces the
//! same structured error body as every other failure.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
