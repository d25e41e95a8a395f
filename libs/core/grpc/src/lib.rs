//! # gRPC Helpers
//!
//! Server-side plumbing shared by the tonic services in this workspace:
//!
//! - **[`server`]**: `GRPC_*` configuration, health reporting, startup logging, shutdown signal
//! - **[`error`]**: mapping domain errors onto `tonic::Status`
//! - **[`panic`]**: turning a panicking handler into `Status::internal`
//! - **[`interceptors`]**: request-id propagation
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_helpers::{RequestIdInterceptor, server::{GrpcServer, ServerConfig}};
//! use rpc::blog::blog_service_server::{BlogServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .layer(tonic::service::InterceptorLayer::new(RequestIdInterceptor::new()))
//!     .add_service(health_service)
//!     .add_service(BlogServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

pub mod error;
pub mod interceptors;
pub mod panic;
pub mod server;

pub use error::{GrpcError, StatusResultExt};
pub use interceptors::{REQUEST_ID_HEADER, RequestIdInterceptor};
pub use panic::guard;
