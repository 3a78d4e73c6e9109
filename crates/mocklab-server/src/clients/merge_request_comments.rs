//! Merge Request Comment Client
//!
//! Facade over the comments of one merge request, located by project
//! identifier and per-project merge request sequence number. The locator is
//! resolved on every call, so a merge request deleted after the client was
//! constructed surfaces as `NotFound` rather than stale data.

use chrono::Utc;
use mocklab_models as models;
use mocklab_models::{MergeRequestCommentCreate, MergeRequestCommentEdit};
use tracing::debug;

use crate::context::ClientContext;
use crate::error::{ServerError, ServerResult};
use crate::mappers::ToClientModel;
use crate::merge_request::MergeRequestComment;

/// Client for the comments of one merge request
#[derive(Debug, Clone)]
pub struct MergeRequestCommentClient {
    context: ClientContext,
    project_id: i64,
    mr_iid: i64,
}

impl MergeRequestCommentClient {
    /// Create a comment client bound to one merge request locator
    pub fn new(context: ClientContext, project_id: i64, mr_iid: i64) -> Self {
        MergeRequestCommentClient {
            context,
            project_id,
            mr_iid,
        }
    }

    /// All comments of the merge request, in insertion order
    ///
    /// Reflects the store's state at the time of the call: an edit performed
    /// through any client against the same server shows up in the next `all`
    /// without re-adding the comment.
    pub fn all(&self) -> ServerResult<Vec<models::MergeRequestComment>> {
        self.context.server().read(|server| {
            let merge_request = server.merge_request(self.project_id, self.mr_iid)?;
            Ok(merge_request
                .comments
                .iter()
                .map(ToClientModel::to_client_model)
                .collect())
        })
    }

    /// Add a comment from an API representation
    ///
    /// Only the body is taken from the input; a caller-supplied identifier,
    /// author, or timestamp is discarded and replaced with server-side values.
    pub fn add(
        &self,
        comment: &models::MergeRequestComment,
    ) -> ServerResult<models::MergeRequestComment> {
        self.create(&MergeRequestCommentCreate {
            body: comment.body.clone(),
            created_at: None,
        })
    }

    /// Add a comment from a create request
    ///
    /// Requires an authenticated user; the stored comment's author is the
    /// authenticated user and its identifier is allocated by the comments
    /// collection.
    pub fn create(
        &self,
        request: &MergeRequestCommentCreate,
    ) -> ServerResult<models::MergeRequestComment> {
        let author = self.context.authenticated_user()?.clone();
        debug!(
            project_id = self.project_id,
            mr_iid = self.mr_iid,
            "creating merge request comment"
        );

        self.context.server().write(|server| {
            let merge_request = server.merge_request_mut(self.project_id, self.mr_iid)?;
            let comment = MergeRequestComment {
                id: 0,
                author,
                body: request.body.clone(),
                created_at: request.created_at.unwrap_or_else(Utc::now),
            };
            let id = merge_request.comments.add(comment)?;
            let stored = merge_request
                .comments
                .get_by_id(id)
                .ok_or_else(|| ServerError::not_found(format!("comment {id}")))?;
            Ok(stored.to_client_model())
        })
    }

    /// Edit a comment's body in place
    ///
    /// Fails with `NotFound` when the merge request or the comment is absent;
    /// the store is left unchanged in that case.
    pub fn edit(
        &self,
        id: i64,
        request: &MergeRequestCommentEdit,
    ) -> ServerResult<models::MergeRequestComment> {
        self.context.authenticated_user()?;
        debug!(
            project_id = self.project_id,
            mr_iid = self.mr_iid,
            comment_id = id,
            "editing merge request comment"
        );

        self.context.server().write(|server| {
            let merge_request = server.merge_request_mut(self.project_id, self.mr_iid)?;
            let comment = merge_request
                .comments
                .get_mut_by_id(id)
                .ok_or_else(|| ServerError::not_found(format!("comment {id}")))?;
            comment.body = request.body.clone();
            Ok(comment.to_client_model())
        })
    }
}
