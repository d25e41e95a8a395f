//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod id_path;
pub mod validated_json;

pub use id_path::{IdPath, IdPathRejection};
pub use validated_json::ValidatedJson;
