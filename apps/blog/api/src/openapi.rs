use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Create, read, update and delete blog posts"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = crate::api::BLOGS_PATH, api = domain_blogs::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
