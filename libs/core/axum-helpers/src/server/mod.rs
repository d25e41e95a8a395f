//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and the common middleware stack
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! // Health endpoints sit at the root, behind the same middleware
//! let probes = health_router(app_info!());
//! let router = create_router::<ApiDoc>(api_routes, probes).await?;
//!
//! // Start server with graceful shutdown
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router, create_router_with_cors};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
