//! TubeDeck Storage
//!
//! Durable, per-user playlist storage for TubeDeck, backed by one JSON
//! file per user.
//!
//! # Architecture
//!
//! - **Per-User Partition**: every record belongs to exactly one `UserId`;
//!   each user's playlists live in their own file
//! - **Invariants at the Write Path**: the cross-playlist dedup rule is
//!   checked inside a per-user critical section, so concurrent adds of the
//!   same video cannot both commit
//! - **Atomic Records**: writes replace the whole record via temp file +
//!   rename; an operation either fully persists or has no effect
//! - **Forgiving Reads**: a missing or corrupt record loads as an empty
//!   library, never an error
//!
//! # Example
//!
//! ```rust,no_run
//! use tubedeck_core::{NewVideo, UserId};
//! use tubedeck_storage::{JsonLibraryStore, PlaylistStore};
//!
//! # async fn example() -> tubedeck_core::Result<()> {
//! let backend = JsonLibraryStore::open("./data").await?;
//! let store = PlaylistStore::new(backend);
//!
//! let alice = UserId::new("alice");
//! let playlist = store.create_playlist(&alice, "Favorites").await?;
//! store
//!     .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod fs;
mod store;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use fs::{JsonLibraryStore, LibraryStore};
pub use store::PlaylistStore;
pub use users::UserRegistry;
