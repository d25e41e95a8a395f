use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Blog;

/// Persistence contract for blogs. Implementations own no business rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert `blog` and return it with the assigned ID
    async fn create(&self, blog: Blog) -> RepositoryResult<Blog>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Blog>>;

    /// Replace every field of an existing row
    async fn update(&self, blog: Blog) -> RepositoryResult<Blog>;

    async fn delete(&self, id: i64) -> RepositoryResult<()>;

    /// All blogs in ascending ID order
    async fn list(&self) -> RepositoryResult<Vec<Blog>>;
}

/// In-memory implementation of BlogRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryBlogRepository {
    blogs: Arc<RwLock<BTreeMap<i64, Blog>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            blogs: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, mut blog: Blog) -> RepositoryResult<Blog> {
        blog.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        blog.created_at = now;
        blog.updated_at = now;

        self.blogs.write().await.insert(blog.id, blog.clone());

        tracing::info!(blog_id = blog.id, "Created blog");
        Ok(blog)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.get(&id).cloned())
    }

    async fn update(&self, mut blog: Blog) -> RepositoryResult<Blog> {
        let mut blogs = self.blogs.write().await;
        let existing = blogs
            .get_mut(&blog.id)
            .ok_or(RepositoryError::NotFound(blog.id))?;

        blog.created_at = existing.created_at;
        blog.updated_at = Utc::now();
        *existing = blog.clone();

        tracing::info!(blog_id = blog.id, "Updated blog");
        Ok(blog)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut blogs = self.blogs.write().await;
        blogs.remove(&id).ok_or(RepositoryError::NotFound(id))?;

        tracing::info!(blog_id = id, "Deleted blog");
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample(title: &str) -> Blog {
        Blog::new(title, "Some content for the post", "Tester")
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryBlogRepository::new();

        let first = repo.create(sample("First")).await.unwrap();
        let second = repo.create(sample("Second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryBlogRepository::new();
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_bumps_timestamp() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(sample("Original")).await.unwrap();

        let mut changed = created.clone();
        changed.title = "Changed".into();
        let updated = repo.update(changed).await.unwrap();

        assert_eq!(updated.title, "Changed");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Changed");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row() {
        let repo = InMemoryBlogRepository::new();
        let mut ghost = sample("Ghost");
        ghost.id = 9;

        assert!(matches!(
            repo.update(ghost).await,
            Err(RepositoryError::NotFound(9))
        ));
        assert!(matches!(
            repo.delete(9).await,
            Err(RepositoryError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryBlogRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        for title in ["a post", "b post", "c post"] {
            repo.create(sample(title)).await.unwrap();
        }
        repo.delete(2).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_never_share_ids() {
        let repo = InMemoryBlogRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(sample(&format!("Post {i}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let blog = handle.await.unwrap().unwrap();
            assert!(ids.insert(blog.id));
        }
        assert_eq!(ids.len(), 32);
    }
}
