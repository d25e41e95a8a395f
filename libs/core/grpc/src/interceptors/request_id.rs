use tonic::{Request, Status};

/// Metadata key carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ensures every incoming call carries an `x-request-id`.
///
/// An id supplied by the caller is kept; otherwise a UUIDv4 is generated.
/// Either way the call is logged with the id so handler logs can be
/// correlated with it.
///
/// # Example
/// ```ignore
/// use grpc_helpers::RequestIdInterceptor;
/// use tonic::service::InterceptorLayer;
///
/// Server::builder()
///     .layer(InterceptorLayer::new(RequestIdInterceptor::new()))
///     .add_service(service);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestIdInterceptor;

impl RequestIdInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for RequestIdInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let existing = request
            .metadata()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_owned);

        let request_id = match existing {
            Some(id) => id,
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                let value = id
                    .parse()
                    .map_err(|_| Status::internal("Failed to create request ID"))?;
                request.metadata_mut().insert(REQUEST_ID_HEADER, value);
                id
            }
        };

        tracing::debug!(request_id = %request_id, "Incoming gRPC request");

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::metadata::MetadataValue;
    use tonic::service::Interceptor;

    #[test]
    fn test_generates_request_id() {
        let mut interceptor = RequestIdInterceptor::new();
        let req = interceptor.call(Request::new(())).unwrap();

        let id_str = req
            .metadata()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(uuid::Uuid::parse_str(id_str).is_ok());
    }

    #[test]
    fn test_keeps_caller_request_id() {
        let mut interceptor = RequestIdInterceptor::new();
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, MetadataValue::from_static("abc-123"));

        let req = interceptor.call(request).unwrap();
        let id = req.metadata().get(REQUEST_ID_HEADER).unwrap();
        assert_eq!(id.to_str().unwrap(), "abc-123");
    }
}
