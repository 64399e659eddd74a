//! # Axum Helpers
//!
//! Shared building blocks for the HTTP layer.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the structured `ErrorResponse` body
//!   (`status`, `error`, `message`, `path`, `timestamp`)
//! - **[`extractors`]**: integer path ids and JSON bodies that reject with `AppError`
//! - **[`server`]**: router setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse, attach_request_path};

pub use extractors::{IdPath, JsonBody};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
