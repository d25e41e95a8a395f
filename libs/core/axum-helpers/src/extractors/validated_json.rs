//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// A body that is not valid JSON for `T` is rejected with 400
/// `"Invalid request body"`. Field violations are rejected with 400
/// `"Validation error: [...]"`, see
/// [`describe_validation_errors`](crate::errors::describe_validation_errors).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateBlog {
///     #[validate(length(min = 3, max = 100))]
///     title: String,
/// }
///
/// async fn create_blog(ValidatedJson(payload): ValidatedJson<CreateBlog>) -> String {
///     format!("Creating blog: {}", payload.title)
/// }
///
/// let app = Router::new().route("/blogs", post(create_blog));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e.body_text(), "Rejected request body");
            AppError::BadRequest("Invalid request body".to_string())
        })?;

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}
