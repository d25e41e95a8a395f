use axum::Router;
use domain_blogs::{BlogService, PgBlogRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgBlogRepository::new(state.db.clone());
    let service = BlogService::new(repository);
    handlers::router(service)
}
