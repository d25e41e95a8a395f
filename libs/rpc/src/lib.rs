//! Protobuf messages and tonic stubs for the blog service.
//!
//! The sources live in `proto/`; the Rust code under `src/gen` is generated
//! from them and checked in, so building this crate needs no `protoc`.

pub mod blog {
    include!("gen/blog.v1.rs");
    // blog.v1.tonic.rs is included by blog.v1.rs
}
