//! In-Memory Mock Server
//!
//! The single store behind every client facade. One `MockServer` owns the
//! whole resource graph (users, projects, and everything nested below them);
//! facades share it through an `Arc<RwLock<MockServer>>` held by their
//! [`ClientContext`](crate::context::ClientContext), so identifier allocation
//! and insertion happen atomically under one lock.

use std::sync::{Arc, RwLock};

use mocklab_models::Author;

use crate::clients::Client;
use crate::collection::Collection;
use crate::context::ClientContext;
use crate::error::{ServerError, ServerResult};
use crate::merge_request::MergeRequest;
use crate::project::Project;
use crate::users::{User, UserCollection};

/// In-memory store for the whole resource graph
#[derive(Debug, Default)]
pub struct MockServer {
    /// All known user accounts
    pub users: UserCollection,
    /// All known projects
    pub projects: Collection<Project>,
}

impl MockServer {
    /// Create an empty server
    pub fn new() -> Self {
        MockServer {
            users: UserCollection::new(),
            projects: Collection::new(),
        }
    }

    /// Seed a user, allocating an identifier if it has none
    pub fn add_user(&mut self, user: User) -> ServerResult<i64> {
        self.users.add(user)
    }

    /// Seed a project, allocating an identifier if it has none
    pub fn add_project(&mut self, project: Project) -> ServerResult<i64> {
        self.projects.add(project)
    }

    /// Look up a project by identifier
    pub fn project(&self, project_id: i64) -> ServerResult<&Project> {
        self.projects
            .get_by_id(project_id)
            .ok_or_else(|| ServerError::not_found(format!("project {project_id}")))
    }

    /// Look up a project by identifier for in-place mutation
    pub fn project_mut(&mut self, project_id: i64) -> ServerResult<&mut Project> {
        self.projects
            .get_mut_by_id(project_id)
            .ok_or_else(|| ServerError::not_found(format!("project {project_id}")))
    }

    /// Resolve a merge request by project identifier and sequence number
    pub fn merge_request(&self, project_id: i64, iid: i64) -> ServerResult<&MergeRequest> {
        self.project(project_id)?.merge_request(iid).ok_or_else(|| {
            ServerError::not_found(format!("merge request !{iid} in project {project_id}"))
        })
    }

    /// Resolve a merge request for in-place mutation
    pub fn merge_request_mut(
        &mut self,
        project_id: i64,
        iid: i64,
    ) -> ServerResult<&mut MergeRequest> {
        self.project_mut(project_id)?
            .merge_request_mut(iid)
            .ok_or_else(|| {
                ServerError::not_found(format!("merge request !{iid} in project {project_id}"))
            })
    }
}

/// Handle to a server shared by every facade built against it
///
/// Construction point for client facades: a `SharedServer` hands out
/// [`Client`] values bound to an authenticated user (or to no user), which in
/// turn mint the per-resource facades.
#[derive(Debug, Clone, Default)]
pub struct SharedServer {
    inner: Arc<RwLock<MockServer>>,
}

impl SharedServer {
    /// Wrap a seeded server for shared use
    pub fn new(server: MockServer) -> Self {
        SharedServer {
            inner: Arc::new(RwLock::new(server)),
        }
    }

    /// Run a closure against the store with shared access
    pub fn read<R>(&self, f: impl FnOnce(&MockServer) -> R) -> R {
        f(&self.inner.read().unwrap())
    }

    /// Run a closure against the store with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut MockServer) -> R) -> R {
        f(&mut self.inner.write().unwrap())
    }

    /// Create a client acting as the given user
    ///
    /// Fails with `NotFound` when no such user is stored.
    pub fn client(&self, user_id: i64) -> ServerResult<Client> {
        let author = self.read(|server| {
            server
                .users
                .get_by_id(user_id)
                .map(|user| Author {
                    id: user.id,
                    username: user.username.clone(),
                    name: user.name.clone(),
                })
                .ok_or_else(|| ServerError::not_found(format!("user {user_id}")))
        })?;
        Ok(Client::new(ClientContext::new(self.clone(), Some(author))))
    }

    /// Create a client with no authenticated user
    ///
    /// Read operations work; mutating operations fail with `Unauthenticated`.
    pub fn client_anonymous(&self) -> Client {
        Client::new(ClientContext::new(self.clone(), None))
    }
}
