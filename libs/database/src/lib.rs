//! PostgreSQL connectivity for the blog services.
//!
//! Wraps SeaORM connection setup with environment-driven pool settings,
//! start-up retry with exponential backoff, a readiness ping and a generic
//! migration runner.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "blog_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
