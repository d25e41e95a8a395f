//! End-to-end tests over a real HTTP/2 connection
//!
//! An in-process server on an ephemeral port, backed by the in-memory
//! repository, with the same interceptor, health service and compression
//! settings as the binary.

use blog_grpc::blog_server;
use domain_blogs::{BlogService, InMemoryBlogRepository};
use grpc_helpers::RequestIdInterceptor;
use grpc_helpers::server::{GrpcServer, ServerConfig};
use rpc::blog::blog_service_client::BlogServiceClient;
use rpc::blog::blog_service_server::SERVICE_NAME;
use rpc::blog::{
    CreateBlogRequest, DeleteBlogRequest, GetBlogRequest, ListBlogsRequest, UpdateBlogRequest,
};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::service::InterceptorLayer;
use tonic::transport::{Channel, Endpoint, Server};
use tonic::{Code, Request};
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;

async fn spawn_server() -> Channel {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let config = ServerConfig::default();
    let service = BlogService::new(InMemoryBlogRepository::new());

    tokio::spawn(async move {
        let _health_reporter = health_reporter;
        Server::builder()
            .layer(InterceptorLayer::new(RequestIdInterceptor::new()))
            .add_service(health_service)
            .add_service(blog_server(service, &config))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    Endpoint::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap()
}

fn blog_client(channel: Channel) -> BlogServiceClient<Channel> {
    BlogServiceClient::new(channel)
        .send_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Zstd)
}

#[tokio::test]
async fn test_health_reports_serving() {
    let mut health = HealthClient::new(spawn_server().await);

    for service in [SERVICE_NAME, ""] {
        let response = health
            .check(HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status, ServingStatus::Serving as i32, "{service:?}");
    }
}

#[tokio::test]
async fn test_blog_lifecycle() {
    let mut client = blog_client(spawn_server().await);

    let created = client
        .create_blog(CreateBlogRequest {
            title: "Test Blog".into(),
            content: "This is a test blog post".into(),
            author: "Test Author".into(),
        })
        .await
        .unwrap()
        .into_inner()
        .blog
        .unwrap();
    assert_ne!(created.id, 0);

    let fetched = client
        .get_blog(GetBlogRequest { id: created.id })
        .await
        .unwrap()
        .into_inner()
        .blog
        .unwrap();
    assert_eq!(fetched, created);

    let updated = client
        .update_blog(UpdateBlogRequest {
            id: created.id,
            title: Some("Updated Title".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner()
        .blog
        .unwrap();
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.content, "This is a test blog post");
    assert_eq!(updated.author, "Test Author");

    let listed = client
        .list_blogs(ListBlogsRequest {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(listed.blogs, vec![updated]);

    let deleted = client
        .delete_blog(DeleteBlogRequest { id: created.id })
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let status = client
        .get_blog(GetBlogRequest { id: created.id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(
        status.message(),
        format!("Blog not found: Blog with ID {} not found", created.id)
    );
}

#[tokio::test]
async fn test_request_id_is_accepted() {
    let mut client = blog_client(spawn_server().await);

    let mut request = Request::new(ListBlogsRequest {});
    request
        .metadata_mut()
        .insert("x-request-id", "test-request-1".parse().unwrap());

    let listed = client.list_blogs(request).await.unwrap().into_inner();
    assert!(listed.blogs.is_empty());
}

#[tokio::test]
async fn test_invalid_create_is_internal() {
    let mut client = blog_client(spawn_server().await);

    let status = client
        .create_blog(CreateBlogRequest {
            title: "Test Blog".into(),
            content: String::new(),
            author: "Test Author".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(
        status.message(),
        "Failed to create blog: All fields are required"
    );
}
