//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

/// Request to follow another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRequest {
    pub followee: String,
}

/// Request to publish a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub username: String,
    pub content: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Response containing a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

/// Response containing one timeline page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub username: String,
    pub posts: Vec<PostResponse>,
}

/// Pagination query parameters for timeline reads.
///
/// Absent parameters default at this boundary, matching the documented
/// behavior: offset 0, limit 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_apply_per_field() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, 10);

        let q: PageQuery = serde_json::from_str(r#"{"offset": 5}"#).unwrap();
        assert_eq!(q.offset, 5);
        assert_eq!(q.limit, 10);
    }
}
