use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::DomainError;

/// Timeline - one user's aggregated feed, newest post first.
///
/// A view object built fresh per request, never persisted. Posts are appended
/// in store order; the store owns the sort contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub username: String,
    pub posts: Vec<Post>,
}

impl Timeline {
    /// Create an empty timeline for a user.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            posts: Vec::new(),
        }
    }

    /// Append a post, enforcing the timeline invariant.
    ///
    /// A post with an empty author or empty content means the store handed us
    /// a corrupted record; construction fails rather than dropping it.
    pub fn push(&mut self, post: Post) -> Result<(), DomainError> {
        if post.author.is_empty() {
            return Err(DomainError::Validation("post has no author".into()));
        }
        if post.content.is_empty() {
            return Err(DomainError::Validation("post has no content".into()));
        }

        self.posts.push(post);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }
}
