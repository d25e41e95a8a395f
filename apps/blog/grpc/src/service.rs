//! Blog gRPC service implementation
//!
//! Every handler runs inside [`grpc_helpers::guard`] so a panic becomes
//! `INTERNAL` instead of tearing down the connection.

use std::sync::Arc;

use domain_blogs::{BlogRepository, BlogService};
use grpc_helpers::{StatusResultExt, guard};
use rpc::blog::{
    BlogResponse, CreateBlogRequest, DeleteBlogRequest, DeleteBlogResponse, GetBlogRequest,
    ListBlogsRequest, ListBlogsResponse, UpdateBlogRequest,
    blog_service_server::BlogService as BlogServiceRpc,
};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::conversions::{
    blog_id, blog_response, blog_to_proto, create_request_to_blog, update_request_to_patch,
};

/// gRPC service implementation for blogs
///
/// Generic over the repository type for testability.
pub struct BlogServiceImpl<R>
where
    R: BlogRepository + 'static,
{
    service: Arc<BlogService<R>>,
}

impl<R> BlogServiceImpl<R>
where
    R: BlogRepository + 'static,
{
    pub fn new(service: BlogService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<R> BlogServiceRpc for BlogServiceImpl<R>
where
    R: BlogRepository + 'static,
{
    async fn create_blog(
        &self,
        request: Request<CreateBlogRequest>,
    ) -> Result<Response<BlogResponse>, Status> {
        guard(async {
            let blog = create_request_to_blog(request.into_inner());
            let blog = self
                .service
                .create_blog(blog)
                .await
                .or_internal("Failed to create blog")?;

            info!(blog_id = blog.id, "Created blog");
            Ok(Response::new(blog_response(blog)))
        })
        .await
    }

    async fn get_blog(
        &self,
        request: Request<GetBlogRequest>,
    ) -> Result<Response<BlogResponse>, Status> {
        guard(async {
            let id = blog_id(request.into_inner().id).or_not_found("Blog not found")?;
            let blog = self
                .service
                .get_blog(id)
                .await
                .or_not_found("Blog not found")?;

            Ok(Response::new(blog_response(blog)))
        })
        .await
    }

    async fn update_blog(
        &self,
        request: Request<UpdateBlogRequest>,
    ) -> Result<Response<BlogResponse>, Status> {
        guard(async {
            let req = request.into_inner();
            let id = blog_id(req.id).or_internal("Failed to update blog")?;
            let blog = self
                .service
                .patch_blog(id, update_request_to_patch(req))
                .await
                .or_internal("Failed to update blog")?;

            Ok(Response::new(blog_response(blog)))
        })
        .await
    }

    async fn delete_blog(
        &self,
        request: Request<DeleteBlogRequest>,
    ) -> Result<Response<DeleteBlogResponse>, Status> {
        guard(async {
            let id = blog_id(request.into_inner().id).or_internal("Failed to delete blog")?;
            self.service
                .delete_blog(id)
                .await
                .or_internal("Failed to delete blog")?;

            info!(blog_id = id, "Deleted blog");
            Ok(Response::new(DeleteBlogResponse { success: true }))
        })
        .await
    }

    async fn list_blogs(
        &self,
        _request: Request<ListBlogsRequest>,
    ) -> Result<Response<ListBlogsResponse>, Status> {
        guard(async {
            let blogs = self
                .service
                .list_blogs()
                .await
                .or_internal("Failed to list blogs")?;

            Ok(Response::new(ListBlogsResponse {
                blogs: blogs.into_iter().map(blog_to_proto).collect(),
            }))
        })
        .await
    }
}
