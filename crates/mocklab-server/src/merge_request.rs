//! Stored Merge Requests and Their Comments

use chrono::{DateTime, Utc};
use mocklab_models::Author;

use crate::collection::Collection;
use crate::entity::Entity;

/// Merge request stored by the mock server
///
/// Carries its owning project's identifier as a plain back-reference; the
/// ownership edge is the containment in the project's collection.
#[derive(Debug, Clone, Default)]
pub struct MergeRequest {
    /// Globally unique merge request ID (`0` until inserted)
    pub id: i64,
    /// Per-project sequence number used in locators (`0` until inserted)
    pub iid: i64,
    /// Identifier of the owning project
    pub project_id: i64,
    /// Merge request title
    pub title: String,
    /// Comments on this merge request
    pub comments: Collection<MergeRequestComment>,
}

impl MergeRequest {
    /// Create a transient merge request with unassigned identifiers
    pub fn new(title: impl Into<String>) -> Self {
        MergeRequest {
            id: 0,
            iid: 0,
            project_id: 0,
            title: title.into(),
            comments: Collection::new(),
        }
    }
}

impl Entity for MergeRequest {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Merge request comment stored by the mock server
///
/// The author is captured from the authenticated user at creation time as an
/// embedded summary, so the comment stays self-contained and the mapper needs
/// nothing beyond the entity itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRequestComment {
    /// Comment ID (`0` until inserted)
    pub id: i64,
    /// Author summary captured at creation
    pub author: Author,
    /// Comment body
    pub body: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MergeRequestComment {
    /// Create a transient comment with an unassigned identifier
    pub fn new(author: Author, body: impl Into<String>) -> Self {
        MergeRequestComment {
            id: 0,
            author,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

impl Entity for MergeRequestComment {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
