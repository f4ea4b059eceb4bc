/// Shared application state
use std::sync::Arc;
use tubedeck_storage::{JsonLibraryStore, PlaylistStore, UserRegistry};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlaylistStore<JsonLibraryStore>>,
    pub users: Arc<UserRegistry>,
}

impl AppState {
    pub fn new(store: Arc<PlaylistStore<JsonLibraryStore>>, users: Arc<UserRegistry>) -> Self {
        Self { store, users }
    }
}
