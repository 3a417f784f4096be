//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect};

use chirp_core::domain::{Follow, Post, User};
use chirp_core::error::RepoError;
use chirp_core::ports::{FollowRepository, PostRepository, UserRepository};

use super::entity::follow::{self, Entity as FollowEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// Transport failures become `Connection` so the boundary can answer 503;
/// everything else is a `Constraint` or `Query` failure.
fn repo_err(e: sea_orm::DbErr) -> RepoError {
    match e {
        sea_orm::DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        sea_orm::DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        e => {
            let msg = e.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = user.into();
        let model = active.insert(&self.db).await.map_err(repo_err)?;
        Ok(model.into())
    }
}

/// PostgreSQL follow-graph repository.
pub struct PostgresFollowRepository {
    db: DbConn,
}

impl PostgresFollowRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn followed_usernames(&self, username: &str) -> Result<Vec<String>, RepoError> {
        let edges = FollowEntity::find()
            .filter(follow::Column::Follower.eq(username))
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(edges.into_iter().map(|e| e.followee).collect())
    }

    async fn save(&self, follow: Follow) -> Result<Follow, RepoError> {
        let active: follow::ActiveModel = follow.into();
        let model = active.insert(&self.db).await.map_err(repo_err)?;
        Ok(model.into())
    }
}

/// PostgreSQL post store.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    /// The database performs the fan-in: one query unions all authors,
    /// sorts by `created_at DESC, id DESC`, and applies the window.
    async fn posts_for_authors(
        &self,
        authors: &[String],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Author.is_in(authors.to_vec()))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(repo_err)?;
        Ok(model.into())
    }
}
