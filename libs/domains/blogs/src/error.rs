use axum::http::StatusCode;
use axum_helpers::AppError;
use sea_orm::DbErr;
use std::error::Error as StdError;
use thiserror::Error;

/// Classification of every failure the service reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    #[strum(serialize = "INTERNAL_SERVER_ERROR")]
    InternalServer,
    Unauthorized,
    Forbidden,
}

impl ErrorKind {
    /// Stable machine-readable code, e.g. `NOT_FOUND`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Raw storage failure, owned by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Blog with ID {0} does not exist")]
    NotFound(i64),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by [`BlogService`](crate::BlogService).
///
/// `Display` is the bare message so transports can forward it as is.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    InternalServer(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Storage failure passed through without classification
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type BlogResult<T> = Result<T, BlogError>;

impl BlogError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::NotFound => BlogError::NotFound(message),
            ErrorKind::InvalidInput => BlogError::InvalidInput(message),
            ErrorKind::InternalServer => BlogError::InternalServer(message),
            ErrorKind::Unauthorized => BlogError::Unauthorized(message),
            ErrorKind::Forbidden => BlogError::Forbidden(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::NotFound(_) => ErrorKind::NotFound,
            BlogError::InvalidInput(_) => ErrorKind::InvalidInput,
            BlogError::InternalServer(_) | BlogError::Repository(_) => ErrorKind::InternalServer,
            BlogError::Unauthorized(_) => ErrorKind::Unauthorized,
            BlogError::Forbidden(_) => ErrorKind::Forbidden,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    /// Recover a `BlogError` from an arbitrary error. Anything that is not
    /// already a `BlogError` becomes `InternalServer` with its text.
    pub fn classify(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<BlogError>() {
            Ok(blog_error) => *blog_error,
            Err(other) => BlogError::InternalServer(other.to_string()),
        }
    }

    /// Convert for a REST response, hiding raw storage text behind
    /// `fallback`.
    pub fn into_app_error(self, fallback: &str) -> AppError {
        match self {
            BlogError::Repository(err) => {
                tracing::error!(error = %err, "{fallback}");
                AppError::InternalServerError(fallback.to_string())
            }
            other => other.into(),
        }
    }
}

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(msg) => AppError::NotFound(msg),
            BlogError::InvalidInput(msg) => AppError::BadRequest(msg),
            BlogError::InternalServer(msg) => AppError::InternalServerError(msg),
            BlogError::Unauthorized(msg) => AppError::Unauthorized(msg),
            BlogError::Forbidden(msg) => AppError::Forbidden(msg),
            BlogError::Repository(err) => {
                tracing::error!(error = %err, "Unclassified repository failure");
                AppError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
