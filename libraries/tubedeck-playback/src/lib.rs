//! TubeDeck - Queue Playback
//!
//! Platform-agnostic sequential playback for TubeDeck.
//!
//! This crate provides:
//! - [`QueuePlayer`]: an explicit cursor over a fixed list of videos with
//!   `advance`/`retreat`/`stop` operations
//! - Stop-at-end semantics: advancing past the last entry clears the queue
//! - Clamped `retreat` so a "previous" affordance never fails at the front
//!
//! `tubedeck-playback` is completely presentation-agnostic: it knows
//! nothing about rendering surfaces or player widgets. Consumers load a
//! materialized queue (typically a `tubedeck_core::view::project` result)
//! and drive the cursor from their own UI events.
//!
//! # Example
//!
//! ```rust
//! use tubedeck_core::NewVideo;
//! use tubedeck_core::types::DEFAULT_MAX_RATING;
//! use tubedeck_playback::{Advance, QueuePlayer};
//!
//! let queue = vec![
//!     NewVideo::new("yt1", "Song A").into_video_ref(DEFAULT_MAX_RATING).unwrap(),
//!     NewVideo::new("yt2", "Song B").into_video_ref(DEFAULT_MAX_RATING).unwrap(),
//! ];
//!
//! let mut player = QueuePlayer::new();
//! player.load(queue).unwrap();
//! assert_eq!(player.current().unwrap().id.as_str(), "yt1");
//!
//! match player.advance().unwrap() {
//!     Advance::Next(video) => assert_eq!(video.id.as_str(), "yt2"),
//!     Advance::EndOfQueue => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod queue;

pub use error::{PlaybackError, Result};
pub use queue::{Advance, QueuePlayer};
