use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum allowed post length in characters.
pub const MAX_CONTENT_LEN: usize = 280;

/// Post entity - a single immutable message authored by a user.
///
/// `created_at` is assigned once at creation and is the sole sort key for
/// timeline ordering; `id` breaks ties to keep pagination stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post, validating author and content.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let author = author.into();
        let content = content.into();

        if author.is_empty() {
            return Err(DomainError::Validation("post must have an author".into()));
        }
        if content.is_empty() {
            return Err(DomainError::Validation("post content is empty".into()));
        }
        if content.chars().count() > MAX_CONTENT_LEN {
            return Err(DomainError::Validation(format!(
                "post content exceeds {MAX_CONTENT_LEN} characters"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            author,
            content,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_content() {
        assert!(Post::new("bob", "").is_err());
    }

    #[test]
    fn rejects_oversized_content() {
        let long = "x".repeat(MAX_CONTENT_LEN + 1);
        assert!(Post::new("bob", long).is_err());
    }

    #[test]
    fn accepts_content_at_limit() {
        let exact = "x".repeat(MAX_CONTENT_LEN);
        let post = Post::new("bob", exact).unwrap();
        assert_eq!(post.author, "bob");
    }
}
