//! Blogs Domain
//!
//! Everything the blog service knows about its single entity, shared by the
//! REST and gRPC binaries.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ Handlers / gRPC impl │  ← wire format <-> service calls
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │       Service        │  ← domain rules, existence checks, error kinds
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │      Repository      │  ← persistence (PostgreSQL or in-memory)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │   Models / Entity    │  ← Blog record, DTOs, sea-orm table
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_blogs::{handlers, InMemoryBlogRepository, BlogService};
//!
//! let service = BlogService::new(InMemoryBlogRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BlogError, BlogResult, ErrorKind, RepositoryError, RepositoryResult};
pub use models::{Blog, BlogPatch, CreateBlog, UpdateBlog};
pub use postgres::PgBlogRepository;
pub use repository::{BlogRepository, InMemoryBlogRepository};
pub use service::BlogService;
