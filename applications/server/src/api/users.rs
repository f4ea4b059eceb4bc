/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use tubedeck_core::{NewUser, User, UserId};

/// POST /api/users
/// Register a new user (identity only; authentication lives elsewhere)
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<Json<User>> {
    let user = state.users.register(req).await?;
    Ok(Json(user))
}

/// GET /api/users
/// List all registered users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// GET /api/users/:id
/// Get a user by id
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>> {
    let user = state.users.get(&UserId::new(id)).await?;
    Ok(Json(user))
}
