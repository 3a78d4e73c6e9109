//! Client Context and Access Gate

use mocklab_models::Author;

use crate::error::{ServerError, ServerResult};
use crate::server::SharedServer;

/// Per-client call context
///
/// Carries the shared store handle and the identity of the caller. The
/// current-user value is set once by the session component that constructed
/// the client; this core only reads it. There is deliberately no process-wide
/// "current user" — two contexts against the same server can act as different
/// users.
#[derive(Debug, Clone)]
pub struct ClientContext {
    server: SharedServer,
    current_user: Option<Author>,
}

impl ClientContext {
    /// Create a context bound to a server and an optional authenticated user
    pub fn new(server: SharedServer, current_user: Option<Author>) -> Self {
        ClientContext {
            server,
            current_user,
        }
    }

    /// The shared store this context operates on
    pub fn server(&self) -> &SharedServer {
        &self.server
    }

    /// Access gate: the authenticated user, or `Unauthenticated`
    ///
    /// Every mutating facade operation calls this before constructing or
    /// touching any entity, so a rejected call leaves the store untouched.
    pub fn authenticated_user(&self) -> ServerResult<&Author> {
        self.current_user
            .as_ref()
            .ok_or_else(|| ServerError::unauthenticated("no user is signed in"))
    }

    /// Whether this context carries an authenticated user
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
