use async_trait::async_trait;

use crate::domain::{Follow, Post, User};
use crate::error::RepoError;

/// User lookup and persistence.
///
/// `Ok(None)` means the user does not exist; `Err` means the store itself
/// failed. The timeline pipeline depends on that distinction.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Persist a new user.
    async fn save(&self, user: User) -> Result<User, RepoError>;
}

/// Follow-graph access.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// The set of usernames `username` currently follows. Order is not
    /// significant; the set may change between calls.
    async fn followed_usernames(&self, username: &str) -> Result<Vec<String>, RepoError>;

    /// Persist a new follow edge.
    async fn save(&self, follow: Follow) -> Result<Follow, RepoError>;
}

/// Post store access.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts authored by any of `authors`, globally sorted by `created_at`
    /// descending with `id` descending as the tie-break, then windowed by
    /// `offset`/`limit`. Every implementation must replicate this contract
    /// exactly so repeated pagination over the same data is stable.
    async fn posts_for_authors(
        &self,
        authors: &[String],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;
}
