/// User library: the full set of playlists owned by one user identity
use crate::error::{DeckError, Result};
use crate::types::{NewVideo, Playlist, PlaylistId, VideoId};
use serde::{Deserialize, Serialize};

/// All playlists owned by a single user
///
/// Playlists are keyed by their generated id; the backing `Vec` keeps
/// creation order stable and serializes to one JSON array per user.
///
/// Invariant: a video id appears in at most ONE playlist across the whole
/// library. Enforced at insertion time by [`UserLibrary::add_video`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserLibrary {
    playlists: Vec<Playlist>,
}

impl UserLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// All playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Find a playlist by id
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Find a playlist by id, mutably
    pub fn playlist_mut(&mut self, id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == id)
    }

    /// Whether any playlist contains the given video id
    pub fn contains_video(&self, video_id: &VideoId) -> bool {
        self.playlists.iter().any(|p| p.contains_video(video_id))
    }

    /// Create a new empty playlist and return it
    ///
    /// Names are display labels: duplicates are allowed, identity is the
    /// generated id.
    pub fn create_playlist(&mut self, name: impl Into<String>) -> Result<&Playlist> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeckError::invalid_input("playlist name is required"));
        }

        self.playlists.push(Playlist::new(name));
        Ok(self.playlists.last().expect("just pushed"))
    }

    /// Delete a playlist and all contained videos. Irreversible.
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        if self.playlists.len() == before {
            return Err(DeckError::not_found("Playlist", id.as_str()));
        }
        Ok(())
    }

    /// Add a video to a playlist, enforcing the cross-playlist dedup rule
    ///
    /// A failed call leaves the library unchanged.
    pub fn add_video(
        &mut self,
        playlist_id: &PlaylistId,
        video: NewVideo,
        max_rating: u8,
    ) -> Result<()> {
        if self.playlist(playlist_id).is_none() {
            return Err(DeckError::not_found("Playlist", playlist_id.as_str()));
        }
        if self.contains_video(&video.id) {
            return Err(DeckError::DuplicateVideo(video.id));
        }

        let video = video.into_video_ref(max_rating)?;
        self.playlist_mut(playlist_id)
            .expect("existence checked above")
            .items
            .push(video);
        Ok(())
    }

    /// Remove a video from a playlist
    ///
    /// Removing a video id that is not present is a no-op, not an error;
    /// only a missing playlist fails.
    pub fn remove_video(&mut self, playlist_id: &PlaylistId, video_id: &VideoId) -> Result<()> {
        let playlist = self
            .playlist_mut(playlist_id)
            .ok_or_else(|| DeckError::not_found("Playlist", playlist_id.as_str()))?;
        playlist.remove_video(video_id);
        Ok(())
    }

    /// Set the rating of a video within a playlist
    pub fn set_rating(
        &mut self,
        playlist_id: &PlaylistId,
        video_id: &VideoId,
        rating: u8,
        max_rating: u8,
    ) -> Result<()> {
        if rating > max_rating {
            return Err(DeckError::invalid_input(format!(
                "rating {rating} outside allowed range 0..={max_rating}"
            )));
        }

        let playlist = self
            .playlist_mut(playlist_id)
            .ok_or_else(|| DeckError::not_found("Playlist", playlist_id.as_str()))?;
        let video = playlist
            .video_mut(video_id)
            .ok_or_else(|| DeckError::not_found("Video", video_id.as_str()))?;
        video.rating = rating;
        Ok(())
    }
}
