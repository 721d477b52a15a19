use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use mongodb::bson::Document;

use crate::controllers;
use crate::db::DynStore;

pub async fn count_route(State(store): State<DynStore>) -> Response {
    controllers::song::count(store.as_ref()).await
}

pub async fn list_songs_route(State(store): State<DynStore>) -> Response {
    controllers::song::list(store.as_ref()).await
}

pub async fn create_song_route(State(store): State<DynStore>, Json(song): Json<Document>) -> Response {
    controllers::song::create(store.as_ref(), song).await
}

pub async fn update_song_route(
    State(store): State<DynStore>,
    Path(id): Path<i64>,
    Json(song): Json<Document>,
) -> Response {
    controllers::song::update(store.as_ref(), id, song).await
}

pub async fn delete_song_route(State(store): State<DynStore>, Path(id): Path<i64>) -> Response {
    controllers::song::delete(store.as_ref(), id).await
}
