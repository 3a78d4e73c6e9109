//! Domain→API Mappers
//!
//! Pure projections from stored entities to the representations handed back
//! across the client boundary. Mapping never mutates the source entity;
//! mapping a sequence is element-wise and order-preserving.

use mocklab_models as models;

use crate::merge_request::MergeRequestComment;
use crate::users::User;

/// Projection of a stored entity into its API-facing representation
pub trait ToClientModel {
    /// The representation returned to callers
    type Model;

    /// Project this entity into its representation
    fn to_client_model(&self) -> Self::Model;
}

impl ToClientModel for MergeRequestComment {
    type Model = models::MergeRequestComment;

    fn to_client_model(&self) -> Self::Model {
        models::MergeRequestComment {
            id: self.id,
            author: Some(self.author.clone()),
            body: self.body.clone(),
            created_at: Some(self.created_at),
        }
    }
}

impl ToClientModel for User {
    type Model = models::User;

    fn to_client_model(&self) -> Self::Model {
        models::User {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: Some(self.created_at),
        }
    }
}
