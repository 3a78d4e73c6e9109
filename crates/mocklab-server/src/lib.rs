//! In-Memory Mock of a GitLab-Style Hosting API
//!
//! This crate emulates a source-control hosting service's resource graph
//! (users, projects, merge requests, comments) entirely in process, so client
//! code can exercise API-shaped operations without a network dependency.
//!
//! # Architecture
//!
//! - [`MockServer`] owns the whole resource graph; [`SharedServer`] wraps it
//!   in a single lock shared by every client built against it.
//! - [`Collection`] is the generic insertion-ordered container enforcing
//!   identifier uniqueness and allocation ([`IdAllocation`]);
//!   [`UserCollection`] adds the username search on top of it.
//! - [`Client`] and the per-resource facades ([`MergeRequestCommentClient`],
//!   [`UserClient`]) expose list/add/edit surfaces bound to a parent locator,
//!   gate every mutation on the context's authenticated user, and return
//!   [`mocklab_models`] representations produced by the pure mappers.
//!
//! # Example
//!
//! ```
//! use mocklab_server::{MergeRequest, MockServer, Project, SharedServer, User};
//! use mocklab_models::MergeRequestCommentCreate;
//!
//! # fn main() -> mocklab_server::ServerResult<()> {
//! let mut server = MockServer::new();
//! let user_id = server.add_user(User::new("jdoe", "Jane Doe"))?;
//! let project_id = server.add_project(Project::new("widget"))?;
//! server
//!     .project_mut(project_id)?
//!     .add_merge_request(MergeRequest::new("Add widgets"))?;
//!
//! let server = SharedServer::new(server);
//! let client = server.client(user_id)?;
//! let comments = client.merge_request_comments(project_id, 1);
//! let comment = comments.create(&MergeRequestCommentCreate {
//!     body: "Looks good".to_string(),
//!     created_at: None,
//! })?;
//! assert_eq!(comment.author.unwrap().username, "jdoe");
//! # Ok(())
//! # }
//! ```

mod clients;
mod collection;
mod context;
mod entity;
mod error;
mod mappers;
mod merge_request;
mod project;
mod server;
mod users;

pub use clients::{Client, MergeRequestCommentClient, UserClient};
// Stored comments embed the model-side `Author` summary, so it is part of this
// crate's public surface too.
pub use mocklab_models::Author;
pub use collection::{Collection, IdAllocation};
pub use context::ClientContext;
pub use entity::{Entity, UNASSIGNED_ID};
pub use error::{ServerError, ServerResult};
pub use mappers::ToClientModel;
pub use merge_request::{MergeRequest, MergeRequestComment};
pub use project::Project;
pub use server::{MockServer, SharedServer};
pub use users::{User, UserCollection};
