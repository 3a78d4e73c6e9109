//! Stored Projects

use crate::collection::Collection;
use crate::entity::Entity;
use crate::error::ServerResult;
use crate::merge_request::MergeRequest;

/// Project stored by the mock server
///
/// Owns its merge requests; a merge request exists only as long as the
/// project's collection holds it.
#[derive(Debug, Clone, Default)]
pub struct Project {
    /// Project ID (`0` until inserted)
    pub id: i64,
    /// Project name
    pub name: String,
    /// Merge requests belonging to this project
    pub merge_requests: Collection<MergeRequest>,
}

impl Project {
    /// Create a transient project with an unassigned identifier
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            id: 0,
            name: name.into(),
            merge_requests: Collection::new(),
        }
    }

    /// Insert a merge request into this project
    ///
    /// Assigns the merge request's per-project sequence number (`iid`) as the
    /// next free value when unset, and stamps the owning project's identifier
    /// on the child.
    pub fn add_merge_request(&mut self, mut merge_request: MergeRequest) -> ServerResult<i64> {
        if merge_request.iid == 0 {
            merge_request.iid = self
                .merge_requests
                .iter()
                .map(|mr| mr.iid)
                .max()
                .unwrap_or(0)
                + 1;
        }
        merge_request.project_id = self.id;
        self.merge_requests.add(merge_request)
    }

    /// Look up a merge request by its per-project sequence number
    pub fn merge_request(&self, iid: i64) -> Option<&MergeRequest> {
        self.merge_requests.iter().find(|mr| mr.iid == iid)
    }

    /// Look up a merge request by sequence number for in-place mutation
    pub fn merge_request_mut(&mut self, iid: i64) -> Option<&mut MergeRequest> {
        self.merge_requests.iter_mut().find(|mr| mr.iid == iid)
    }
}

impl Entity for Project {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
