/// Router assembly
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    // Public routes (no identity required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/users", post(api::users::register_user))
        .route("/users", get(api::users::list_users))
        .route("/users/:id", get(api::users::get_user));

    // Library routes (X-User-Id identity required)
    let library_routes = Router::new()
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", get(api::playlists::get_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route("/playlists/:id/view", get(api::playlists::view_playlist))
        .route("/playlists/:id/videos", post(api::playlists::add_video))
        .route(
            "/playlists/:id/videos/:video_id",
            delete(api::playlists::remove_video),
        )
        .route(
            "/playlists/:id/videos/:video_id",
            patch(api::playlists::set_rating),
        )
        // Favorites query
        .route("/videos/:video_id/favorited", get(api::playlists::is_favorited))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::identity_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(library_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
