use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A blog post
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "title": "Test Blog",
///   "content": "This is a test blog post",
///   "author": "Test Author",
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    /// Assigned by storage; `0` until the record is persisted
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Build an unpersisted record.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Overwrite the fields present in `patch`. Missing or empty values keep
    /// the current field.
    pub fn apply_patch(&mut self, patch: BlogPatch) {
        fn merge(field: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *field = value;
            }
        }

        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
        merge(&mut self.author, patch.author);
    }
}

/// Sparse set of field changes for a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// DTO for creating a blog
///
/// Missing fields deserialize as empty strings so they are reported as
/// "is required" by validation instead of failing body parsing.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBlog {
    #[serde(default)]
    #[validate(length(min = 3, max = 100))]
    #[schema(min_length = 3, max_length = 100, example = "Test Blog")]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 10))]
    #[schema(min_length = 10, example = "This is a test blog post")]
    pub content: String,

    #[serde(default)]
    #[validate(length(min = 2, max = 50))]
    #[schema(min_length = 2, max_length = 50, example = "Test Author")]
    pub author: String,
}

impl From<CreateBlog> for Blog {
    fn from(input: CreateBlog) -> Self {
        Blog::new(input.title, input.content, input.author)
    }
}

/// DTO for a partial update; omitted or empty fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBlog {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 3, max = 100))]
    #[schema(min_length = 3, max_length = 100)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 10))]
    #[schema(min_length = 10)]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 2, max = 50))]
    #[schema(min_length = 2, max_length = 50)]
    pub author: Option<String>,
}

impl From<UpdateBlog> for BlogPatch {
    fn from(input: UpdateBlog) -> Self {
        Self {
            title: input.title,
            content: input.content,
            author: input.author,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
