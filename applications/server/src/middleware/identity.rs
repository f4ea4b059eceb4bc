/// Identity middleware
///
/// Authentication is an external collaborator; the server only consumes an
/// identity token: the `X-User-Id` header. Requests without it (or with an
/// unregistered id) may run no library operations.
use crate::{error::ServerError, state::AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tubedeck_core::{DeckError, UserId};

/// Header carrying the caller's identity token
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extension type storing the resolved user ID in the request
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl CurrentUser {
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

/// Middleware that resolves the `X-User-Id` header to a registered user
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(UserId::new)
        .ok_or_else(|| ServerError::Unauthorized("Missing X-User-Id header".to_string()))?;

    // Unknown ids are rejected up front so handlers only see real users.
    // Only a missing user is a bad token; storage failures keep their class.
    let user = match state.users.get(&user_id).await {
        Ok(user) => user,
        Err(e @ DeckError::NotFound { .. }) => {
            tracing::warn!(user = %user_id, "identity lookup failed: {}", e);
            return Err(ServerError::Unauthorized("Unknown user".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    request.extensions_mut().insert(CurrentUser(user.id));

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so CurrentUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthorized("Not authenticated".to_string()))
    }
}
