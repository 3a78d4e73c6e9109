//! API-Facing Data Models
//!
//! Value objects exchanged across the mock client boundary. These stand in for
//! the wire representations a real hosting-service client would serialize, so
//! every type here derives `Serialize`/`Deserialize` and carries its timestamps
//! as `chrono::DateTime<Utc>`.

mod merge_requests;
mod users;

pub use merge_requests::{
    MergeRequestComment, MergeRequestCommentCreate, MergeRequestCommentEdit,
};
pub use users::{Author, User};
