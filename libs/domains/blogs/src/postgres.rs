use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{RepositoryError, RepositoryResult},
    models::Blog,
    repository::BlogRepository,
};

/// PostgreSQL implementation of [`BlogRepository`] using sea-orm
#[derive(Clone)]
pub struct PgBlogRepository {
    db: DatabaseConnection,
}

impl PgBlogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, blog: Blog) -> RepositoryResult<Blog> {
        let mut active_model: entity::ActiveModel = Blog { id: 0, ..blog }.into();
        let now = Utc::now();
        active_model.created_at = Set(now.into());
        active_model.updated_at = Set(now.into());

        let model = active_model.insert(&self.db).await?;

        tracing::info!(blog_id = model.id, "Created blog");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Blog>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, blog: Blog) -> RepositoryResult<Blog> {
        let id = blog.id;
        let model = entity::ActiveModel {
            id: Set(id),
            title: Set(blog.title),
            content: Set(blog.content),
            author: Set(blog.author),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => RepositoryError::NotFound(id),
            other => RepositoryError::Database(other),
        })?;

        tracing::info!(blog_id = id, "Updated blog");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        tracing::info!(blog_id = id, "Deleted blog");
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Blog>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
