//! User registry
//!
//! A single `users.json` under the data directory. The registry only
//! anchors the per-user data partition: passwords and sessions belong to
//! an external authentication collaborator and are never stored here.

use crate::error::StorageError;
use crate::fs::write_json_atomic;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tubedeck_core::{DeckError, NewUser, Result, User, UserId};

/// File-backed registry of user accounts
pub struct UserRegistry {
    users_file: PathBuf,
    write_lock: Mutex<()>,
}

impl UserRegistry {
    /// Open a registry rooted at `data_dir`, creating the file's directory
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            StorageError::Write {
                path: data_dir.display().to_string(),
                source: e,
            }
        })?;
        Ok(Self {
            users_file: data_dir.join("users.json"),
            write_lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<User>> {
        let raw = match tokio::fs::read(&self.users_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.users_file.display().to_string(),
                    source: e,
                }
                .into());
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::warn!(error = %e, "users file unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Register a new user
    ///
    /// Usernames are unique case-insensitively; a clash fails with
    /// `DuplicateName` and commits nothing.
    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.read_all().await?;
        let taken = users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&new_user.username));
        if taken {
            return Err(DeckError::DuplicateName(new_user.username));
        }

        let user = new_user.into_user()?;
        users.push(user.clone());
        write_json_atomic(&self.users_file, &users).await?;

        tracing::info!(user = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Look up a user by id
    pub async fn get(&self, user_id: &UserId) -> Result<User> {
        self.read_all()
            .await?
            .into_iter()
            .find(|u| &u.id == user_id)
            .ok_or_else(|| DeckError::not_found("User", user_id.as_str()))
    }

    /// Look up a user by username (case-insensitive)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|u| u.username.eq_ignore_ascii_case(username)))
    }

    /// All registered users
    pub async fn list(&self) -> Result<Vec<User>> {
        self.read_all().await
    }
}
