//! gRPC Server utilities.

use super::config::ServerConfig;
use tokio::signal;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::{error, info};

/// Helper for starting gRPC servers with health checks.
///
/// # Example
///
/// ```ignore
/// use grpc_helpers::server::{GrpcServer, ServerConfig};
/// use rpc::blog::blog_service_server::SERVICE_NAME;
///
/// let (health_reporter, health_service) = tonic_health::server::health_reporter();
/// GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
/// GrpcServer::log_startup(&config, SERVICE_NAME);
/// ```
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what k8s default gRPC probes ask for.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }

    /// Mark `service_name` and the empty service name as not serving.
    ///
    /// Called once shutdown begins so load balancers stop routing to us.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, ServingStatus::NotServing)
            .await;
        health_reporter
            .set_service_status("", ServingStatus::NotServing)
            .await;
    }
}

/// Resolves on Ctrl+C or SIGTERM. Pass to `serve_with_shutdown`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, stopping gRPC server"),
        _ = terminate => info!("Received SIGTERM, stopping gRPC server"),
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;
