//! Proto ↔ domain conversions
//!
//! Both sides live in other crates, so these are plain functions rather
//! than `From` impls.

use domain_blogs::{Blog, BlogError, BlogPatch, ErrorKind};
use rpc::blog as proto;

pub fn blog_to_proto(blog: Blog) -> proto::Blog {
    proto::Blog {
        id: u64::try_from(blog.id).unwrap_or_default(),
        title: blog.title,
        content: blog.content,
        author: blog.author,
    }
}

pub fn blog_response(blog: Blog) -> proto::BlogResponse {
    proto::BlogResponse {
        blog: Some(blog_to_proto(blog)),
    }
}

/// Wire ids are unsigned; storage ids are `i64`. No stored blog can carry
/// an id past `i64::MAX`, so those are reported as missing and the caller
/// maps that onto its own status code.
pub fn blog_id(id: u64) -> Result<i64, BlogError> {
    i64::try_from(id).map_err(|_| {
        BlogError::new(ErrorKind::NotFound, format!("Blog with ID {id} not found"))
    })
}

pub fn create_request_to_blog(req: proto::CreateBlogRequest) -> Blog {
    Blog::new(req.title, req.content, req.author)
}

pub fn update_request_to_patch(req: proto::UpdateBlogRequest) -> BlogPatch {
    BlogPatch {
        title: req.title,
        content: req.content,
        author: req.author,
    }
}
