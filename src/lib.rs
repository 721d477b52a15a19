pub mod config;
pub mod controllers;
pub mod dataset;
pub mod db;
pub mod models;
pub mod routers;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::DynStore;
use crate::routers::{
    count_route, create_song_route, delete_song_route, health_route, list_songs_route,
    update_song_route,
};

/// Assemble the HTTP surface over a song store.
pub fn app(store: DynStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_route))
        .route("/count", get(count_route))
        .route("/song", get(list_songs_route).post(create_song_route))
        .route("/song/{id}", put(update_song_route).delete(delete_song_route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
