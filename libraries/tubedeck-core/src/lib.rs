//! TubeDeck Core
//!
//! Domain types, invariants, and pure projections for TubeDeck, a per-user
//! favorites/playlist manager for web videos.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `VideoRef`, `Playlist`, `UserLibrary`, `User`
//! - **Invariants**: cross-playlist video dedup, rating bounds, idempotent
//!   removal, all enforced by `UserLibrary` mutations
//! - **Projections**: [`view::project`], a pure filtered/sorted view of
//!   playlist items
//! - **Error Handling**: unified [`DeckError`] and [`Result`] types
//!
//! Persistence, identity, and presentation are collaborators: this crate
//! performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use tubedeck_core::types::{NewVideo, UserLibrary, DEFAULT_MAX_RATING};
//! use tubedeck_core::view::{project, SortMode};
//!
//! let mut library = UserLibrary::new();
//! let favorites = library.create_playlist("Favorites").unwrap().id.clone();
//! library
//!     .add_video(&favorites, NewVideo::new("yt1", "Song A"), DEFAULT_MAX_RATING)
//!     .unwrap();
//!
//! let items = &library.playlist(&favorites).unwrap().items;
//! let view = project(items, "song", SortMode::TitleAscending);
//! assert_eq!(view.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use error::{DeckError, Result};
pub use types::{
    NewUser, NewVideo, Playlist, PlaylistId, User, UserId, UserLibrary, VideoId, VideoRef,
};
pub use view::SortMode;
