//! Shared test utilities for the blog crates
//!
//! - `TestDatabase`: PostgreSQL container with the blog migrations applied
//! - `TestDataBuilder`: deterministic, valid blog field values
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let title = data.title("main");
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Deterministic test data keyed by a seed.
///
/// Every value satisfies the REST validation bounds (title 3-100,
/// content >= 10, author 2-50 characters) so builders can feed both the
/// service and the HTTP layer.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name so two tests never share data.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("test_create_blog");
    /// assert!(data.title("main").len() >= 3);
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn title(&self, suffix: &str) -> String {
        format!("Post {} {}", self.seed % 100_000, suffix)
    }

    pub fn content(&self, suffix: &str) -> String {
        format!("Body of post {} ({suffix}) with enough words to pass validation", self.seed)
    }

    pub fn author(&self) -> String {
        format!("Author {}", self.seed % 10_000)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Display;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a result failed and its message contains `needle`.
    pub fn assert_err_contains<T, E: Display>(result: Result<T, E>, needle: &str) {
        match result {
            Ok(_) => panic!("expected an error containing {needle:?}, got Ok"),
            Err(e) => assert!(
                e.to_string().contains(needle),
                "expected error containing {needle:?}, got {e}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.title("x"), b.title("x"));
        assert_eq!(a.author(), b.author());
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");

        assert_ne!(a.content("x"), b.content("x"));
    }

    #[test]
    fn test_data_builder_values_are_within_bounds() {
        let data = TestDataBuilder::new(u64::MAX);

        let title = data.title("a-fairly-long-suffix");
        assert!((3..=100).contains(&title.chars().count()));
        assert!(data.content("x").chars().count() >= 10);
        assert!((2..=50).contains(&data.author().chars().count()));
    }

    #[test]
    #[should_panic(expected = "expected an error containing")]
    fn test_assert_err_contains_rejects_ok() {
        assertions::assert_err_contains(Ok::<(), String>(()), "boom");
    }
}
