use axum::Router;

pub mod blogs;
pub mod health;

/// Versioned base path of the blog resource, below `/api`.
pub const BLOGS_PATH: &str = "/v1/blogs";

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(BLOGS_PATH, blogs::router(state))
}

/// `/ready`, served at the root next to `/health`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
