//! Stored Users and the User Collection

use chrono::{DateTime, Utc};

use crate::collection::{Collection, IdAllocation};
use crate::entity::Entity;
use crate::error::ServerResult;

/// User account stored by the mock server
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// User ID (`0` until inserted)
    pub id: i64,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a transient user with an unassigned identifier
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: 0,
            username: username.into(),
            name: name.into(),
            email: None,
            created_at: Utc::now(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Collection of user accounts
///
/// Wraps the generic [`Collection`] with the user-specific secondary query.
/// Identifier uniqueness and allocation follow the collection's policy;
/// usernames are not required to be unique at this layer.
#[derive(Debug, Clone, Default)]
pub struct UserCollection {
    users: Collection<User>,
}

impl UserCollection {
    /// Create an empty user collection with the default allocation policy
    pub fn new() -> Self {
        UserCollection {
            users: Collection::new(),
        }
    }

    /// Create an empty user collection with an explicit allocation policy
    pub fn with_policy(policy: IdAllocation) -> Self {
        UserCollection {
            users: Collection::with_policy(policy),
        }
    }

    /// Insert a user, allocating an identifier if it has none
    ///
    /// Fails with `AlreadyExists` when the user arrives with an identifier
    /// that is already occupied.
    pub fn add(&mut self, user: User) -> ServerResult<i64> {
        self.users.add(user)
    }

    /// Look up a user by identifier
    pub fn get_by_id(&self, id: i64) -> Option<&User> {
        self.users.get_by_id(id)
    }

    /// Remove a user by identifier, returning it if present
    pub fn remove_by_id(&mut self, id: i64) -> Option<User> {
        self.users.remove_by_id(id)
    }

    /// Case-insensitive exact-match search by username
    ///
    /// Yields zero or more matches in insertion order.
    pub fn search_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> impl Iterator<Item = &'a User> + 'a {
        let needle = username.to_lowercase();
        self.users
            .iter()
            .filter(move |user| user.username.to_lowercase() == needle)
    }

    /// Iterate over the users in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
