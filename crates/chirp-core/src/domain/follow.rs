use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Follow entity - a directed edge from `follower` to `followee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub id: Uuid,
    pub follower: String,
    pub followee: String,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new follow edge.
    pub fn new(follower: impl Into<String>, followee: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower: follower.into(),
            followee: followee.into(),
            created_at: Utc::now(),
        }
    }
}
