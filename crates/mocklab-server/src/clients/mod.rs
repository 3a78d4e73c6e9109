//! Client Facades
//!
//! Per-resource operation surfaces that stand in for a real API client. Each
//! facade is bound at construction to a [`ClientContext`] and (for
//! sub-resources) a parent locator; operations resolve the live parent on
//! every call and go through the context's access gate before mutating.

mod merge_request_comments;
mod users;

pub use merge_request_comments::MergeRequestCommentClient;
pub use users::UserClient;

use crate::context::ClientContext;

/// Root facade from which per-resource clients are obtained
#[derive(Debug, Clone)]
pub struct Client {
    context: ClientContext,
}

impl Client {
    /// Create a root client over a context
    pub fn new(context: ClientContext) -> Self {
        Client { context }
    }

    /// The context this client operates with
    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Client for the comments of one merge request
    ///
    /// `mr_iid` is the per-project sequence number, not the global id.
    pub fn merge_request_comments(
        &self,
        project_id: i64,
        mr_iid: i64,
    ) -> MergeRequestCommentClient {
        MergeRequestCommentClient::new(self.context.clone(), project_id, mr_iid)
    }

    /// Client for user accounts
    pub fn users(&self) -> UserClient {
        UserClient::new(self.context.clone())
    }
}
