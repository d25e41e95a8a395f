use std::fmt::Display;
use thiserror::Error;
use tonic::Status;

/// Errors that stop a gRPC server from starting or serving
#[derive(Error, Debug)]
pub enum GrpcError {
    /// `GRPC_HOST`/`GRPC_PORT` do not form a socket address
    #[error("Invalid listen address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Extension trait turning any displayable error into a `tonic::Status`
/// whose message is `"{context}: {error}"`.
///
/// # Example
/// ```ignore
/// use grpc_helpers::StatusResultExt;
///
/// let blog = service.create_blog(blog).await.or_internal("Failed to create blog")?;
/// ```
pub trait StatusResultExt<T> {
    /// Map the error to `INTERNAL`
    fn or_internal(self, context: &str) -> Result<T, Status>;

    /// Map the error to `NOT_FOUND`
    fn or_not_found(self, context: &str) -> Result<T, Status>;
}

impl<T, E: Display> StatusResultExt<T> for Result<T, E> {
    fn or_internal(self, context: &str) -> Result<T, Status> {
        self.map_err(|e| Status::internal(format!("{context}: {e}")))
    }

    fn or_not_found(self, context: &str) -> Result<T, Status> {
        self.map_err(|e| Status::not_found(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_or_internal_prefixes_context() {
        let result: Result<(), String> = Err("All fields are required".into());
        let status = result.or_internal("Failed to create blog").unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(
            status.message(),
            "Failed to create blog: All fields are required"
        );
    }

    #[test]
    fn test_or_not_found() {
        let result: Result<(), &str> = Err("Blog with ID 3 not found");
        let status = result.or_not_found("Blog not found").unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Blog not found: Blog with ID 3 not found");
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, String> = Ok(7);
        assert_eq!(result.or_not_found("ignored").unwrap(), 7);
    }
}
