/// User domain types
use crate::error::{DeckError, Result};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
///
/// Authentication (passwords, sessions) lives outside the core; a user
/// record only anchors the per-user data partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique case-insensitively
    pub username: String,

    /// Display name
    pub display_name: String,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for registering a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name
    pub username: String,

    /// Display name
    pub display_name: String,

    /// Avatar URL
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewUser {
    /// Validate and convert into a `User` with a generated id
    pub fn into_user(self) -> Result<User> {
        if self.username.trim().is_empty() {
            return Err(DeckError::invalid_input("username is required"));
        }
        if self.display_name.trim().is_empty() {
            return Err(DeckError::invalid_input("display name is required"));
        }

        Ok(User {
            id: UserId::generate(),
            username: self.username,
            display_name: self.display_name,
            image_url: self.image_url,
            created_at: Utc::now(),
        })
    }
}
