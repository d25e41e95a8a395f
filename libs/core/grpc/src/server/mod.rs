//! gRPC server configuration, health reporting and shutdown.
//!
//! ```ignore
//! use grpc_helpers::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use rpc::blog::blog_service_server::{BlogServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(BlogServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service, shutdown_signal};
pub use config::ServerConfig;
