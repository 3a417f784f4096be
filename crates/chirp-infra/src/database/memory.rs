//! In-memory repository implementations.
//!
//! Used when no database is configured and as the backing stores in tests.
//! `InMemoryPostRepository` replicates the post-store sort/window contract
//! exactly: union of authors, `created_at` descending, `id` descending as the
//! tie-break, then offset/limit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use chirp_core::domain::{Follow, Post, User};
use chirp_core::error::RepoError;
use chirp_core::ports::{FollowRepository, PostRepository, UserRepository};

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        // Mirror the unique constraints the Postgres schema enforces
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepoError::Constraint("user already exists".into()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory follow-graph repository.
#[derive(Default)]
pub struct InMemoryFollowRepository {
    edges: RwLock<Vec<Follow>>,
}

impl InMemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn followed_usernames(&self, username: &str) -> Result<Vec<String>, RepoError> {
        let edges = self.edges.read().await;
        Ok(edges
            .iter()
            .filter(|e| e.follower == username)
            .map(|e| e.followee.clone())
            .collect())
    }

    async fn save(&self, follow: Follow) -> Result<Follow, RepoError> {
        self.edges.write().await.push(follow.clone());
        Ok(follow)
    }
}

/// In-memory post store.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn posts_for_authors(
        &self,
        authors: &[String],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut matched: Vec<Post> = posts
            .iter()
            .filter(|p| authors.contains(&p.author))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }
}
