/// Playlists API routes
use crate::{error::Result, error::ServerError, middleware::CurrentUser, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tubedeck_core::{
    view, NewVideo, Playlist, PlaylistId, SortMode, VideoId, VideoRef,
};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

/// Video descriptor as resolved by the metadata collaborator
///
/// `rating` is accepted as a signed integer so out-of-range values
/// (including negatives) fail with a validation error instead of a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct AddVideoRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SetRatingRequest {
    pub rating: i32,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub sort: SortMode,
}

fn rating_from_wire(rating: i32) -> Result<u8> {
    u8::try_from(rating)
        .map_err(|_| ServerError::BadRequest(format!("Invalid input: rating {rating} outside allowed range")))
}

/// GET /api/playlists
/// Get all playlists of the authenticated user
pub async fn list_playlists(
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<Vec<Playlist>>> {
    let library = state.store.library(auth.user_id()).await?;
    Ok(Json(library.playlists().to_vec()))
}

/// POST /api/playlists
/// Create a new playlist
pub async fn create_playlist(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let playlist = state.store.create_playlist(auth.user_id(), &req.name).await?;
    Ok(Json(playlist))
}

/// GET /api/playlists/:id
/// Get playlist details with items
pub async fn get_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<Playlist>> {
    let playlist = state
        .store
        .playlist(auth.user_id(), &PlaylistId::new(id))
        .await?;
    Ok(Json(playlist))
}

/// GET /api/playlists/:id/view?filter=&sort=
/// Filtered/sorted projection of a playlist for display
pub async fn view_playlist(
    Path(id): Path<String>,
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<Vec<VideoRef>>> {
    let playlist = state
        .store
        .playlist(auth.user_id(), &PlaylistId::new(id))
        .await?;
    let projected = view::project(&playlist.items, &query.filter, query.sort);
    Ok(Json(projected))
}

/// DELETE /api/playlists/:id
/// Delete a playlist and everything in it
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<serde_json::Value>> {
    state
        .store
        .delete_playlist(auth.user_id(), &PlaylistId::new(id))
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/videos
/// Add an already-resolved video descriptor to a playlist
pub async fn add_video(
    Path(id): Path<String>,
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<AddVideoRequest>,
) -> Result<Json<serde_json::Value>> {
    let rating = req.rating.map(rating_from_wire).transpose()?;

    let video = NewVideo {
        id: VideoId::new(req.id),
        title: req.title,
        thumbnail_url: req.thumbnail_url,
        duration: req.duration,
        view_count: req.view_count,
        rating,
    };

    state
        .store
        .add_video(auth.user_id(), &PlaylistId::new(id), video)
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/playlists/:id/videos/:video_id
/// Remove a video from a playlist (idempotent)
pub async fn remove_video(
    Path((id, video_id)): Path<(String, String)>,
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<serde_json::Value>> {
    state
        .store
        .remove_video(
            auth.user_id(),
            &PlaylistId::new(id),
            &VideoId::new(video_id),
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// PATCH /api/playlists/:id/videos/:video_id
/// Set the rating of a video
pub async fn set_rating(
    Path((id, video_id)): Path<(String, String)>,
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<SetRatingRequest>,
) -> Result<Json<serde_json::Value>> {
    let rating = rating_from_wire(req.rating)?;

    state
        .store
        .set_rating(
            auth.user_id(),
            &PlaylistId::new(id),
            &VideoId::new(video_id),
            rating,
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/videos/:video_id/favorited
/// Whether the video already exists in any of the user's playlists
pub async fn is_favorited(
    Path(video_id): Path<String>,
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<serde_json::Value>> {
    let favorited = state
        .store
        .is_video_favorited(auth.user_id(), &VideoId::new(video_id))
        .await?;
    Ok(Json(serde_json::json!({ "favorited": favorited })))
}
