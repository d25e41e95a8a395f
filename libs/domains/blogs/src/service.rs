use std::sync::Arc;
use tracing::instrument;

use crate::error::{BlogError, BlogResult};
use crate::models::{Blog, BlogPatch};
use crate::repository::BlogRepository;

/// Service layer for blog business rules
///
/// Holds no state besides the repository, so it can be shared freely
/// between request handlers.
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> Clone for BlogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new blog and return it with its assigned ID.
    ///
    /// Repository failures are returned unclassified.
    #[instrument(skip(self, blog), fields(title = %blog.title))]
    pub async fn create_blog(&self, blog: Blog) -> BlogResult<Blog> {
        if blog.title.is_empty() || blog.content.is_empty() || blog.author.is_empty() {
            return Err(BlogError::InvalidInput("All fields are required".to_string()));
        }

        Ok(self.repository.create(blog).await?)
    }

    /// Fetch a blog. Every repository failure, including a missing row,
    /// is reported as `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_blog(&self, id: i64) -> BlogResult<Blog> {
        match self.repository.get_by_id(id).await {
            Ok(Some(blog)) => Ok(blog),
            Ok(None) => Err(not_found(id)),
            Err(e) => {
                tracing::debug!(error = %e, "Lookup failed");
                Err(not_found(id))
            }
        }
    }

    /// Replace every field of an existing blog with `blog`.
    #[instrument(skip(self, blog), fields(id = blog.id))]
    pub async fn update_blog(&self, blog: Blog) -> BlogResult<Blog> {
        if !blog.is_persisted() {
            return Err(BlogError::InvalidInput("Blog ID is required".to_string()));
        }

        self.get_blog(blog.id).await?;

        Ok(self.repository.update(blog).await?)
    }

    /// Merge `patch` into the stored blog and save it.
    #[instrument(skip(self, patch))]
    pub async fn patch_blog(&self, id: i64, patch: BlogPatch) -> BlogResult<Blog> {
        if id == 0 {
            return Err(BlogError::InvalidInput("Blog ID is required".to_string()));
        }

        let mut blog = self.get_blog(id).await?;
        blog.apply_patch(patch);
        self.update_blog(blog).await
    }

    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: i64) -> BlogResult<()> {
        self.get_blog(id).await?;

        Ok(self.repository.delete(id).await?)
    }

    /// All blogs in ascending ID order. An empty store is not an error.
    #[instrument(skip(self))]
    pub async fn list_blogs(&self) -> BlogResult<Vec<Blog>> {
        Ok(self.repository.list().await?)
    }
}

fn not_found(id: i64) -> BlogError {
    BlogError::NotFound(format!("Blog with ID {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, RepositoryError};
    use crate::repository::{InMemoryBlogRepository, MockBlogRepository};
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn sample() -> Blog {
        Blog::new("Test Blog", "This is a test blog post", "Test Author")
    }

    fn stored(id: i64) -> Blog {
        Blog { id, ..sample() }
    }

    fn db_error() -> RepositoryError {
        RepositoryError::Database(DbErr::Custom("connection refused".into()))
    }

    #[tokio::test]
    async fn test_create_blog_assigns_id() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|blog| Ok(Blog { id: 1, ..blog }));

        let service = BlogService::new(mock_repo);
        let created = service.create_blog(sample()).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Test Blog");
    }

    #[tokio::test]
    async fn test_create_blog_requires_every_field() {
        let cases = [
            Blog::new("", "This is a test blog post", "Test Author"),
            Blog::new("Test Blog", "", "Test Author"),
            Blog::new("Test Blog", "This is a test blog post", ""),
        ];

        for blog in cases {
            let mut mock_repo = MockBlogRepository::new();
            mock_repo.expect_create().never();

            let service = BlogService::new(mock_repo);
            let err = service.create_blog(blog).await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert_eq!(err.message(), "All fields are required");
        }
    }

    #[tokio::test]
    async fn test_create_blog_passes_repository_error_through() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_create().returning(|_| Err(db_error()));

        let service = BlogService::new(mock_repo);
        let err = service.create_blog(sample()).await.unwrap_err();

        assert!(matches!(err, BlogError::Repository(RepositoryError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_blog_missing_is_not_found() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = BlogService::new(mock_repo);
        let err = service.get_blog(42).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Blog with ID 42 not found");
    }

    #[tokio::test]
    async fn test_get_blog_reclassifies_storage_failure() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Err(db_error()));

        let service = BlogService::new(mock_repo);
        let err = service.get_blog(7).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Blog with ID 7 not found");
    }

    #[tokio::test]
    async fn test_update_blog_without_id_never_touches_repository() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let service = BlogService::new(mock_repo);
        let err = service.update_blog(sample()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.message(), "Blog ID is required");
    }

    #[tokio::test]
    async fn test_update_blog_checks_existence_first() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = BlogService::new(mock_repo);
        let err = service.update_blog(stored(5)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_blog_passes_repository_error_through() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored(id))));
        mock_repo.expect_update().returning(|_| Err(db_error()));

        let service = BlogService::new(mock_repo);
        let err = service.update_blog(stored(3)).await.unwrap_err();

        assert!(matches!(err, BlogError::Repository(_)));
    }

    #[tokio::test]
    async fn test_patch_blog_merges_sparse_fields() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(2))
            .returning(|id| Ok(Some(stored(id))));
        mock_repo
            .expect_update()
            .withf(|blog| {
                blog.id == 2
                    && blog.title == "Updated Title"
                    && blog.content == "This is a test blog post"
                    && blog.author == "Test Author"
            })
            .returning(Ok);

        let service = BlogService::new(mock_repo);
        let patch = BlogPatch {
            title: Some("Updated Title".into()),
            ..Default::default()
        };
        let updated = service.patch_blog(2, patch).await.unwrap();

        assert_eq!(updated.title, "Updated Title");
    }

    #[tokio::test]
    async fn test_patch_blog_without_id_is_invalid() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_get_by_id().never();

        let service = BlogService::new(mock_repo);
        let err = service.patch_blog(0, BlogPatch::default()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_delete_blog_missing_is_not_found() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let service = BlogService::new(mock_repo);
        let err = service.delete_blog(11).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Blog with ID 11 not found");
    }

    #[tokio::test]
    async fn test_delete_blog_passes_repository_error_through() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored(id))));
        mock_repo
            .expect_delete()
            .with(eq(4))
            .returning(|_| Err(db_error()));

        let service = BlogService::new(mock_repo);
        let err = service.delete_blog(4).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InternalServer);
        assert!(matches!(err, BlogError::Repository(_)));
    }

    #[tokio::test]
    async fn test_list_blogs_empty_is_ok() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));

        let service = BlogService::new(mock_repo);
        assert!(service.list_blogs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_against_in_memory_repository() {
        let service = BlogService::new(InMemoryBlogRepository::new());

        let created = service.create_blog(sample()).await.unwrap();
        assert_ne!(created.id, 0);

        let fetched = service.get_blog(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Test Blog");
        assert_eq!(fetched.content, "This is a test blog post");
        assert_eq!(fetched.author, "Test Author");

        service.delete_blog(created.id).await.unwrap();
        let err = service.get_blog(created.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = service.delete_blog(created.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
