//! Timeline assembly - the read-time fan-in pipeline.
//!
//! `TimelineService` answers "give me user U's timeline at offset O, limit L"
//! by resolving U's follow set, fetching the merged page from the post store,
//! and caching the computed page (cache-aside). The service is stateless and
//! safe to call concurrently; all shared state lives behind the ports.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Post, Timeline};
use crate::error::{RepoError, TimelineError};
use crate::ports::{Cache, FollowRepository, PostRepository, UserRepository};


/// Immutable assembler configuration, injected at construction.
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Upper bound on each upstream call (user lookup, follow set, post
    /// fetch, cache get/set). An elapsed store call is an upstream failure;
    /// an elapsed cache call is just a miss.
    pub upstream_timeout: Duration,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            upstream_timeout: Duration::from_secs(5),
        }
    }
}

/// Cache key for one timeline page.
///
/// Offset and limit are part of the key, so each page is an independent cache
/// entry with an independent lifetime. Overlapping windows may therefore show
/// mildly inconsistent content within the TTL; that is the documented
/// trade-off, not a bug.
pub fn page_key(username: &str, offset: u64, limit: u64) -> String {
    format!("timeline:{username}:offset={offset}:limit={limit}")
}

/// Assembles reverse-chronological timelines from the follow graph, the post
/// store, and the page cache.
pub struct TimelineService {
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowRepository>,
    posts: Arc<dyn PostRepository>,
    cache: Arc<dyn Cache>,
    config: TimelineConfig,
}

impl TimelineService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        follows: Arc<dyn FollowRepository>,
        posts: Arc<dyn PostRepository>,
        cache: Arc<dyn Cache>,
        config: TimelineConfig,
    ) -> Self {
        Self {
            users,
            follows,
            posts,
            cache,
            config,
        }
    }

    /// Build `username`'s timeline page at `offset`/`limit`.
    ///
    /// Pipeline: verify the user exists, fetch the follow set, short-circuit
    /// if empty, then serve the page from cache or fall through to the post
    /// store and write the result back. A returned timeline is always
    /// complete and well-formed; partial results never escape.
    pub async fn get_timeline(
        &self,
        username: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Timeline, TimelineError> {
        let limit = limit.max(1);

        let user = self.bounded(self.users.find_by_username(username)).await?;
        if user.is_none() {
            return Err(TimelineError::UserNotFound(username.to_string()));
        }

        let followed = self.bounded(self.follows.followed_usernames(username)).await?;
        if followed.is_empty() {
            // Valid and cheap; not worth a cache entry.
            return Ok(Timeline::new(username));
        }

        let key = page_key(username, offset, limit);
        if let Some(timeline) = self.cached_page(username, &key).await {
            return Ok(timeline);
        }

        let posts = self
            .bounded(self.posts.posts_for_authors(&followed, offset, limit))
            .await?;
        if posts.is_empty() {
            // Do not cache transient empty pages.
            return Ok(Timeline::new(username));
        }

        let timeline = self.build(username, posts.clone()).ok_or_else(|| {
            tracing::error!(%username, "post store returned a corrupted record");
            TimelineError::DataCorruption(format!("corrupted post in {username}'s feed"))
        })?;

        self.store_page(&key, &posts).await;

        Ok(timeline)
    }

    /// Look up a cached page and rebuild the timeline from it.
    ///
    /// Any fault on this path - transport error, timeout, undecodable or
    /// invariant-violating payload - degrades to a miss. Cache trouble is
    /// never the caller's problem.
    async fn cached_page(&self, username: &str, key: &str) -> Option<Timeline> {
        let raw = match tokio::time::timeout(self.config.upstream_timeout, self.cache.get(key))
            .await
        {
            Ok(Ok(hit)) => hit?,
            Ok(Err(e)) => {
                tracing::warn!(%key, error = %e, "cache read failed, treating as miss");
                return None;
            }
            Err(_) => {
                tracing::warn!(%key, "cache read timed out, treating as miss");
                return None;
            }
        };

        let posts = match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(%key, error = %e, "cached page undecodable, treating as miss");
                return None;
            }
        };

        match self.build(username, posts) {
            Some(timeline) => Some(timeline),
            None => {
                tracing::warn!(%key, "cached page violates post invariant, treating as miss");
                None
            }
        }
    }

    /// Write-through of a freshly computed page. Best-effort: failures are
    /// logged and swallowed, the timeline has already been assembled.
    async fn store_page(&self, key: &str, posts: &[Post]) {
        let payload = match serde_json::to_string(posts) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to serialize timeline page");
                return;
            }
        };

        match tokio::time::timeout(self.config.upstream_timeout, self.cache.set(key, &payload))
            .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(%key, error = %e, "cache write failed"),
            Err(_) => tracing::warn!(%key, "cache write timed out"),
        }
    }

    /// Assemble a timeline from posts in store order. `None` if any post
    /// violates the invariant.
    fn build(&self, username: &str, posts: Vec<Post>) -> Option<Timeline> {
        let mut timeline = Timeline::new(username);
        for post in posts {
            timeline.push(post).ok()?;
        }
        Some(timeline)
    }

    /// Bound an upstream call by the configured timeout and classify its
    /// failure. A timeout is an upstream failure, never a silent miss.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, RepoError>>,
    ) -> Result<T, TimelineError> {
        match tokio::time::timeout(self.config.upstream_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(TimelineError::UpstreamUnavailable(e.to_string())),
            Err(_) => Err(TimelineError::UpstreamUnavailable(
                "upstream call timed out".to_string(),
            )),
        }
    }
}
