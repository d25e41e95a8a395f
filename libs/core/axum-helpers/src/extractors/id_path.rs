//! Numeric id path parameter extractor.

use crate::errors::error_response;
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for positive integer ids in the path.
///
/// Accepts decimal values in `1..=u32::MAX`; anything else is rejected with
/// [`IdPathRejection`]. Handlers that want their own message take
/// `Result<IdPath, IdPathRejection>` instead.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_blog(IdPath(id): IdPath) -> String {
///     format!("Blog ID: {}", id)
/// }
///
/// let app = Router::new().route("/blogs/{id}", get(get_blog));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

/// The raw path segment that failed to parse as an id.
#[derive(Debug)]
pub struct IdPathRejection(pub String);

impl IntoResponse for IdPathRejection {
    fn into_response(self) -> Response {
        tracing::info!(raw = %self.0, "Rejected invalid id path parameter");
        error_response(StatusCode::BAD_REQUEST, "Invalid ID")
    }
}

impl IdPath {
    /// Parse the textual id.
    pub fn parse(raw: &str) -> Result<Self, IdPathRejection> {
        match raw.parse::<u32>() {
            Ok(id) if id > 0 => Ok(IdPath(i64::from(id))),
            _ => Err(IdPathRejection(raw.to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = IdPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| IdPathRejection(e.body_text()))?;

        IdPath::parse(&raw)
    }
}
