//! Authoritative playlist store
//!
//! Wraps a [`LibraryStore`] with the mutation operations of the domain.
//! Every mutation is a read-modify-write executed inside a per-user
//! critical section, so the cross-playlist dedup check and the persisted
//! write cannot interleave with another writer for the same user.
//! Operations for different users never contend.

use crate::fs::LibraryStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tubedeck_core::types::DEFAULT_MAX_RATING;
use tubedeck_core::{
    DeckError, NewVideo, Playlist, PlaylistId, Result, UserId, UserLibrary, VideoId,
};

/// Durable, per-user playlist collection
///
/// All operations take the `UserId` explicitly; there is no ambient
/// "current user" session state.
pub struct PlaylistStore<S: LibraryStore> {
    backend: S,
    max_rating: u8,
    // grows one bare-mutex entry per user id ever touched, never pruned;
    // bounded by the registered user population
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl<S: LibraryStore> PlaylistStore<S> {
    /// Create a store with the default rating bound (0..=5)
    pub fn new(backend: S) -> Self {
        Self::with_max_rating(backend, DEFAULT_MAX_RATING)
    }

    /// Create a store with a custom rating bound
    pub fn with_max_rating(backend: S, max_rating: u8) -> Self {
        Self {
            backend,
            max_rating,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Upper bound of the rating scale
    pub fn max_rating(&self) -> u8 {
        self.max_rating
    }

    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        Arc::clone(locks.entry(user_id.clone()).or_default())
    }

    /// Run a closure over the user's library under their critical section,
    /// persisting only when the closure succeeds
    async fn mutate<T>(
        &self,
        user_id: &UserId,
        f: impl FnOnce(&mut UserLibrary) -> Result<T>,
    ) -> Result<T> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let mut library = self.backend.load(user_id).await?;
        let out = f(&mut library)?;
        self.backend.save(user_id, &library).await?;
        Ok(out)
    }

    /// Read the user's full library
    pub async fn library(&self, user_id: &UserId) -> Result<UserLibrary> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;
        self.backend.load(user_id).await
    }

    /// Read one playlist
    pub async fn playlist(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<Playlist> {
        self.library(user_id)
            .await?
            .playlist(playlist_id)
            .cloned()
            .ok_or_else(|| DeckError::not_found("Playlist", playlist_id.as_str()))
    }

    /// Create a new empty playlist and return it
    pub async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist> {
        let name = name.to_string();
        let playlist = self
            .mutate(user_id, move |library| {
                Ok(library.create_playlist(name)?.clone())
            })
            .await?;
        tracing::debug!(user = %user_id, playlist = %playlist.id, "playlist created");
        Ok(playlist)
    }

    /// Delete a playlist and everything in it. Irreversible.
    pub async fn delete_playlist(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<()> {
        self.mutate(user_id, |library| library.delete_playlist(playlist_id))
            .await?;
        tracing::debug!(user = %user_id, playlist = %playlist_id, "playlist deleted");
        Ok(())
    }

    /// Add an already-resolved video descriptor to a playlist
    ///
    /// Fails with `DuplicateVideo` if the video id exists in ANY of the
    /// user's playlists, not just the target one.
    pub async fn add_video(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        video: NewVideo,
    ) -> Result<()> {
        let max_rating = self.max_rating;
        self.mutate(user_id, move |library| {
            library.add_video(playlist_id, video, max_rating)
        })
        .await
    }

    /// Remove a video from a playlist; absent video ids are a no-op
    pub async fn remove_video(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        video_id: &VideoId,
    ) -> Result<()> {
        self.mutate(user_id, |library| library.remove_video(playlist_id, video_id))
            .await
    }

    /// Set the rating of a video
    pub async fn set_rating(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        video_id: &VideoId,
        rating: u8,
    ) -> Result<()> {
        let max_rating = self.max_rating;
        self.mutate(user_id, move |library| {
            library.set_rating(playlist_id, video_id, rating, max_rating)
        })
        .await
    }

    /// Whether the video id exists in any of the user's playlists
    ///
    /// Read-through query against the current store state; presentation
    /// layers use it to disable "add" affordances.
    pub async fn is_video_favorited(&self, user_id: &UserId, video_id: &VideoId) -> Result<bool> {
        Ok(self.library(user_id).await?.contains_video(video_id))
    }
}
