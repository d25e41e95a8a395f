use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AppError, IdPath, IdPathRejection, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Blog, CreateBlog, UpdateBlog};
use crate::repository::BlogRepository;
use crate::service::BlogService;

pub const TAG: &str = "blogs";

/// OpenAPI documentation for the Blogs API
#[derive(OpenApi)]
#[openapi(
    paths(list_blogs, create_blog, get_blog, update_blog, delete_blog),
    components(
        schemas(Blog, CreateBlog, UpdateBlog),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Blog management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<BlogService<R>>>;

/// Create the blog router with all HTTP endpoints
pub fn router<R: BlogRepository + 'static>(service: BlogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route(
            "/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .with_state(shared_service)
}

fn blog_id(id: Result<IdPath, IdPathRejection>) -> Result<i64, AppError> {
    id.map(|IdPath(id)| id)
        .map_err(|_| AppError::BadRequest("Invalid blog ID".to_string()))
}

/// List every blog
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Blogs retrieved successfully", body = ApiResponse<Vec<Blog>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_blogs<R: BlogRepository>(
    State(service): SharedService<R>,
) -> Result<ApiResponse<Vec<Blog>>, AppError> {
    let blogs = service
        .list_blogs()
        .await
        .map_err(|e| e.into_app_error("Failed to retrieve blogs"))?;

    Ok(ApiResponse::ok("Blogs retrieved successfully", blogs))
}

/// Create a new blog
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBlog,
    responses(
        (status = 201, description = "Blog created successfully", body = ApiResponse<Blog>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_blog<R: BlogRepository>(
    State(service): SharedService<R>,
    ValidatedJson(input): ValidatedJson<CreateBlog>,
) -> Result<impl IntoResponse, AppError> {
    let blog = service
        .create_blog(input.into())
        .await
        .map_err(|e| e.into_app_error("Failed to create blog"))?;

    Ok(ApiResponse::ok("Blog created successfully", blog).with_status(StatusCode::CREATED))
}

/// Get a blog by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog retrieved successfully", body = ApiResponse<Blog>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_blog<R: BlogRepository>(
    State(service): SharedService<R>,
    id: Result<IdPath, IdPathRejection>,
) -> Result<ApiResponse<Blog>, AppError> {
    let id = blog_id(id)?;
    let blog = service
        .get_blog(id)
        .await
        .map_err(|e| e.into_app_error("Failed to retrieve blog"))?;

    Ok(ApiResponse::ok("Blog retrieved successfully", blog))
}

/// Partially update a blog; omitted or empty fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u32, Path, description = "Blog ID")
    ),
    request_body = UpdateBlog,
    responses(
        (status = 200, description = "Blog updated successfully", body = ApiResponse<Blog>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_blog<R: BlogRepository>(
    State(service): SharedService<R>,
    id: Result<IdPath, IdPathRejection>,
    input: Result<ValidatedJson<UpdateBlog>, AppError>,
) -> Result<ApiResponse<Blog>, AppError> {
    // The id is checked before the body.
    let id = blog_id(id)?;
    let ValidatedJson(input) = input?;

    let blog = service
        .patch_blog(id, input.into())
        .await
        .map_err(|e| e.into_app_error("Failed to update blog"))?;

    Ok(ApiResponse::ok("Blog updated successfully", blog))
}

/// Delete a blog
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_blog<R: BlogRepository>(
    State(service): SharedService<R>,
    id: Result<IdPath, IdPathRejection>,
) -> Result<ApiResponse<()>, AppError> {
    let id = blog_id(id)?;
    service
        .delete_blog(id)
        .await
        .map_err(|e| e.into_app_error("Failed to delete blog"))?;

    Ok(ApiResponse::message("Blog deleted successfully"))
}
