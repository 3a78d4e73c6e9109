//! Merge Request Comment Data Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::Author;

/// Merge request comment as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequestComment {
    /// Comment ID (`0` means not yet assigned)
    #[serde(default)]
    pub id: i64,
    /// Comment author
    #[serde(default)]
    pub author: Option<Author>,
    /// Comment body
    pub body: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a merge request comment
///
/// Only the body is caller-controllable; the author is always taken from the
/// authenticated user and the timestamp defaults to the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequestCommentCreate {
    /// Comment body
    pub body: String,
    /// Optional creation-timestamp override
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request payload for editing a merge request comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequestCommentEdit {
    /// Replacement comment body
    pub body: String,
}
