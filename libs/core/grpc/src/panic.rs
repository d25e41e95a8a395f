//! Panic containment for tonic handlers.
//!
//! tonic has no equivalent of tower-http's `CatchPanicLayer`, so handlers
//! wrap their body in [`guard`].

use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tonic::Status;

/// Run `fut`, converting a panic into `Status::internal("Internal server error")`.
///
/// # Example
/// ```ignore
/// async fn get_blog(&self, request: Request<GetBlogRequest>) -> Result<Response<BlogResponse>, Status> {
///     grpc_helpers::guard(self.get_blog_inner(request)).await
/// }
/// ```
pub async fn guard<T, F>(fut: F) -> Result<T, Status>
where
    F: Future<Output = Result<T, Status>>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&str>().copied())
                .unwrap_or("unknown panic payload");
            tracing::error!(panic = %detail, "gRPC handler panicked");
            Err(Status::internal("Internal server error"))
        }
    }
}
