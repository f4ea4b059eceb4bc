/// Video domain types
use crate::error::{DeckError, Result};
use crate::types::VideoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default upper bound of the rating scale (0..=5)
pub const DEFAULT_MAX_RATING: u8 = 5;

/// Immutable descriptor of a playable media item
///
/// Metadata resolution (oEmbed, platform APIs) happens outside the core;
/// a `VideoRef` is always constructed from an already-resolved descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Stable unique identifier of the underlying media
    pub id: VideoId,

    /// Display name
    pub title: String,

    /// Thumbnail URL, if the source provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Display-only duration string, never used for logic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Display-only view count string, never used for logic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,

    /// User rating, 0 means unrated
    #[serde(default)]
    pub rating: u8,

    /// When the video was added to its playlist; immutable afterwards
    pub added_at: DateTime<Utc>,
}

/// Input for adding a video to a playlist
///
/// Validated on conversion: `id` and `title` are required, the initial
/// rating (if any) must be within the configured bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVideo {
    /// Stable unique identifier of the underlying media
    pub id: VideoId,

    /// Display name
    pub title: String,

    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Display-only duration string
    #[serde(default)]
    pub duration: Option<String>,

    /// Display-only view count string
    #[serde(default)]
    pub view_count: Option<String>,

    /// Initial rating; defaults to 0 (unrated)
    #[serde(default)]
    pub rating: Option<u8>,
}

impl NewVideo {
    /// Create a new video input with the required fields only
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: VideoId::new(id),
            title: title.into(),
            thumbnail_url: None,
            duration: None,
            view_count: None,
            rating: None,
        }
    }

    /// Validate and convert into a `VideoRef` with `added_at = now`
    pub fn into_video_ref(self, max_rating: u8) -> Result<VideoRef> {
        if self.id.as_str().trim().is_empty() {
            return Err(DeckError::invalid_input("video id is required"));
        }
        if self.title.trim().is_empty() {
            return Err(DeckError::invalid_input("video title is required"));
        }

        let rating = self.rating.unwrap_or(0);
        if rating > max_rating {
            return Err(DeckError::invalid_input(format!(
                "rating {rating} outside allowed range 0..={max_rating}"
            )));
        }

        Ok(VideoRef {
            id: self.id,
            title: self.title,
            thumbnail_url: self.thumbnail_url,
            duration: self.duration,
            view_count: self.view_count,
            rating,
            added_at: Utc::now(),
        })
    }
}
