/// Domain types for TubeDeck
pub mod ids;
pub mod library;
pub mod playlist;
pub mod user;
pub mod video;

pub use ids::{PlaylistId, UserId, VideoId};
pub use library::UserLibrary;
pub use playlist::Playlist;
pub use user::{NewUser, User};
pub use video::{NewVideo, VideoRef, DEFAULT_MAX_RATING};
