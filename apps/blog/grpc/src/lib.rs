//! Blog gRPC Service
//!
//! Serves `blog.v1.BlogService` over tonic.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, zstd compression, x-request-id)
//! BlogServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions)
//! BlogService (domain_blogs)
//!   ↓
//! PgBlogRepository
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `server`: configuration, database bootstrap and server lifecycle
//! - `service`: gRPC trait implementation
//! - `conversions`: proto ↔ domain mapping

pub mod conversions;
pub mod server;
pub mod service;

pub use server::{blog_server, run};
pub use service::BlogServiceImpl;
