/// Playlist domain types
use crate::types::{PlaylistId, VideoId, VideoRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named, ordered collection of videos
///
/// Identity is the generated `id`; the name is a display label and is not
/// required to be unique within a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier, generated at creation
    pub id: PlaylistId,

    /// Playlist name (display label)
    pub name: String,

    /// Videos in insertion order
    #[serde(default)]
    pub items: Vec<VideoRef>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the playlist contains a video with the given id
    pub fn contains_video(&self, video_id: &VideoId) -> bool {
        self.items.iter().any(|v| &v.id == video_id)
    }

    /// Find a video by id
    pub fn video(&self, video_id: &VideoId) -> Option<&VideoRef> {
        self.items.iter().find(|v| &v.id == video_id)
    }

    /// Find a video by id, mutably
    pub fn video_mut(&mut self, video_id: &VideoId) -> Option<&mut VideoRef> {
        self.items.iter_mut().find(|v| &v.id == video_id)
    }

    /// Remove a video by id; returns whether anything was removed
    pub fn remove_video(&mut self, video_id: &VideoId) -> bool {
        let before = self.items.len();
        self.items.retain(|v| &v.id != video_id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::video::{NewVideo, DEFAULT_MAX_RATING};

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new("My Favorites");

        assert_eq!(playlist.name, "My Favorites");
        assert!(playlist.items.is_empty());
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn remove_video_is_idempotent() {
        let mut playlist = Playlist::new("Mix");
        let video = NewVideo::new("yt1", "Song A")
            .into_video_ref(DEFAULT_MAX_RATING)
            .unwrap();
        playlist.items.push(video);

        assert!(playlist.remove_video(&VideoId::new("yt1")));
        assert!(!playlist.remove_video(&VideoId::new("yt1")));
        assert!(playlist.items.is_empty());
    }
}
