//! JSON-file persistence for user libraries
//!
//! One file per user under `<data_dir>/playlists/<user_id>.json`, holding
//! the user's playlists as a single JSON array. Writes go through a
//! temporary file in the same directory followed by a rename, so a record
//! is either fully replaced or untouched.

use crate::error::StorageError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tubedeck_core::{Result, UserId, UserLibrary};
use uuid::Uuid;

/// Persistence seam for user libraries
///
/// Implementations must uphold the contract of the core: a missing or
/// corrupt record loads as an EMPTY library, never an error, and a
/// successful save is durable before returning.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Load a user's library; missing/corrupt records yield an empty one
    async fn load(&self, user_id: &UserId) -> Result<UserLibrary>;

    /// Persist a user's library atomically
    async fn save(&self, user_id: &UserId, library: &UserLibrary) -> Result<()>;
}

/// File-backed [`LibraryStore`]
#[derive(Debug, Clone)]
pub struct JsonLibraryStore {
    playlists_dir: PathBuf,
}

impl JsonLibraryStore {
    /// Open a store rooted at `data_dir`, creating directories as needed
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let playlists_dir = data_dir.as_ref().join("playlists");
        tokio::fs::create_dir_all(&playlists_dir).await.map_err(|e| {
            StorageError::Write {
                path: playlists_dir.display().to_string(),
                source: e,
            }
        })?;
        Ok(Self { playlists_dir })
    }

    fn library_path(&self, user_id: &UserId) -> PathBuf {
        self.playlists_dir.join(format!("{}.json", user_id))
    }
}

#[async_trait]
impl LibraryStore for JsonLibraryStore {
    async fn load(&self, user_id: &UserId) -> Result<UserLibrary> {
        let path = self.library_path(user_id);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UserLibrary::new());
            }
            Err(e) => {
                return Err(StorageError::Read {
                    path: path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(library) => Ok(library),
            Err(e) => {
                // corrupt record: treat as first use rather than failing reads
                tracing::warn!(
                    user = %user_id,
                    error = %e,
                    "library file unreadable, loading empty library"
                );
                Ok(UserLibrary::new())
            }
        }
    }

    async fn save(&self, user_id: &UserId, library: &UserLibrary) -> Result<()> {
        let path = self.library_path(user_id);
        write_json_atomic(&path, library).await
    }
}

/// Serialize `value` to `path` via a same-directory temp file + rename
pub(crate) async fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value).map_err(StorageError::Serialization)?;

    let tmp = path.with_extension(format!("tmp-{}", Uuid::new_v4()));
    let wrap = |e: std::io::Error| StorageError::Write {
        path: path.display().to_string(),
        source: e,
    };

    tokio::fs::write(&tmp, &json).await.map_err(wrap)?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        // leave no stray temp file behind on a failed rename
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(wrap(e).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubedeck_core::NewVideo;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLibraryStore::open(dir.path()).await.unwrap();

        let library = store.load(&UserId::new("nobody")).await.unwrap();
        assert!(library.playlists().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLibraryStore::open(dir.path()).await.unwrap();

        let path = dir.path().join("playlists").join("alice.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let library = store.load(&UserId::new("alice")).await.unwrap();
        assert!(library.playlists().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLibraryStore::open(dir.path()).await.unwrap();
        let user = UserId::new("alice");

        let mut library = UserLibrary::new();
        let id = library.create_playlist("Favorites").unwrap().id.clone();
        library
            .add_video(&id, NewVideo::new("yt1", "Song A"), 5)
            .unwrap();

        store.save(&user, &library).await.unwrap();
        let loaded = store.load(&user).await.unwrap();
        assert_eq!(loaded, library);
    }

    #[tokio::test]
    async fn save_replaces_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLibraryStore::open(dir.path()).await.unwrap();
        let user = UserId::new("alice");

        let mut library = UserLibrary::new();
        library.create_playlist("First").unwrap();
        store.save(&user, &library).await.unwrap();

        let library = UserLibrary::new();
        store.save(&user, &library).await.unwrap();

        let loaded = store.load(&user).await.unwrap();
        assert!(loaded.playlists().is_empty());
    }
}
