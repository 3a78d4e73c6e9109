//! User Data Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID (`0` means not yet assigned)
    #[serde(default)]
    pub id: i64,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Account creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Condensed user summary embedded in other resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// User ID
    pub id: i64,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
}
