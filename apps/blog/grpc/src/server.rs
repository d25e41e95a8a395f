//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Database connection and migrations
//! - Health service (grpc.health.v1.Health)
//! - Graceful shutdown on Ctrl+C / SIGTERM

use core_config::{AppInfo, Environment, FromEnv};
use database::postgres::{self, PostgresConfig};
use domain_blogs::{BlogRepository, BlogService, PgBlogRepository};
use eyre::{Result, WrapErr};
use grpc_helpers::RequestIdInterceptor;
use grpc_helpers::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
use migration::Migrator;
use rpc::blog::blog_service_server::{BlogServiceServer, SERVICE_NAME};
use tonic::codec::CompressionEncoding;
use tonic::service::InterceptorLayer;
use tonic::transport::Server;
use tracing::info;

use crate::service::BlogServiceImpl;

const APP: AppInfo = core_config::app_info!();

/// Wrap `service` in a tonic server honouring the compression and message
/// size limits of `config`.
pub fn blog_server<R>(
    service: BlogService<R>,
    config: &ServerConfig,
) -> BlogServiceServer<BlogServiceImpl<R>>
where
    R: BlogRepository + 'static,
{
    let server = BlogServiceServer::new(BlogServiceImpl::new(service))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    if config.enable_compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

/// Run the gRPC server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database is
/// unreachable, migrations fail or the listener cannot be bound.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = ServerConfig::from_env().wrap_err("Failed to load gRPC configuration")?;
    let db_config =
        PostgresConfig::from_env().wrap_err("Failed to load database configuration")?;

    info!("Connecting to database...");
    let db = postgres::connect_with_retry(db_config, None)
        .await
        .wrap_err("Failed to connect to database")?;
    postgres::run_migrations::<Migrator>(&db, APP.name)
        .await
        .wrap_err("Failed to run database migrations")?;

    let service = BlogService::new(PgBlogRepository::new(db.clone()));

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config, SERVICE_NAME);

    let addr = config.socket_addr()?;
    let shutdown = async move {
        shutdown_signal().await;
        GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
    };

    Server::builder()
        .layer(InterceptorLayer::new(RequestIdInterceptor::new()))
        .add_service(health_service)
        .add_service(blog_server(service, &config))
        .serve_with_shutdown(addr, shutdown)
        .await
        .wrap_err("gRPC server failed")?;

    postgres::close(db).await;
    info!(app = APP.name, "gRPC server stopped");
    Ok(())
}
