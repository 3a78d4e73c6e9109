//! User Client
//!
//! Facade over the server-wide user collection.

use chrono::Utc;
use mocklab_models as models;
use tracing::debug;

use crate::context::ClientContext;
use crate::error::{ServerError, ServerResult};
use crate::mappers::ToClientModel;
use crate::users::User;

/// Client for user accounts
#[derive(Debug, Clone)]
pub struct UserClient {
    context: ClientContext,
}

impl UserClient {
    /// Create a user client over a context
    pub fn new(context: ClientContext) -> Self {
        UserClient { context }
    }

    /// All users, in insertion order
    pub fn all(&self) -> ServerResult<Vec<models::User>> {
        self.context.server().read(|server| {
            Ok(server
                .users
                .iter()
                .map(ToClientModel::to_client_model)
                .collect())
        })
    }

    /// Users whose username matches, ignoring case
    pub fn search(&self, username: &str) -> ServerResult<Vec<models::User>> {
        self.context.server().read(|server| {
            Ok(server
                .users
                .search_by_username(username)
                .map(ToClientModel::to_client_model)
                .collect())
        })
    }

    /// Look up one user by identifier
    pub fn get(&self, id: i64) -> ServerResult<models::User> {
        self.context.server().read(|server| {
            server
                .users
                .get_by_id(id)
                .map(ToClientModel::to_client_model)
                .ok_or_else(|| ServerError::not_found(format!("user {id}")))
        })
    }

    /// The authenticated user's own account
    pub fn current(&self) -> ServerResult<models::User> {
        let author = self.context.authenticated_user()?;
        self.get(author.id)
    }

    /// Create a user account
    ///
    /// Requires an authenticated user. A representation arriving with an
    /// explicit identifier is stored verbatim (the seeding path) and collides
    /// with `AlreadyExists` when the identifier is occupied; otherwise the
    /// identifier is allocated by the user collection.
    pub fn create(&self, user: &models::User) -> ServerResult<models::User> {
        self.context.authenticated_user()?;
        if user.username.is_empty() {
            return Err(ServerError::invalid_argument("username must not be empty"));
        }
        debug!(username = %user.username, "creating user");

        self.context.server().write(|server| {
            let id = server.users.add(User {
                id: user.id,
                username: user.username.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                created_at: user.created_at.unwrap_or_else(Utc::now),
            })?;
            server
                .users
                .get_by_id(id)
                .map(ToClientModel::to_client_model)
                .ok_or_else(|| ServerError::not_found(format!("user {id}")))
        })
    }
}
