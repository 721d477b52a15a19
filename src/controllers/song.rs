use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::{Bson, Document};
use serde_json::json;
use tracing::error;

use crate::db::SongStore;
use crate::models::song::{InsertedId, SongCount, SongList, song_id};

pub async fn count(store: &dyn SongStore) -> Response {
    match store.count().await {
        Ok(count) => (StatusCode::OK, Json(SongCount { count })).into_response(),
        Err(err) => {
            error!("Error occurred while counting songs: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

pub async fn list(store: &dyn SongStore) -> Response {
    match store.list().await {
        Ok(songs) => (StatusCode::OK, Json(SongList { songs })).into_response(),
        Err(err) => {
            error!("Error occurred while fetching songs: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

/// The duplicate check is a read before the write, so two concurrent creates
/// with the same id can both pass it; single-document consistency is the
/// store's problem, not ours.
pub async fn create(store: &dyn SongStore, song: Document) -> Response {
    let Some(id) = song_id(&song) else {
        error!("Error occurred while creating song: request body has no integer id field");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response();
    };

    match store.find_by_song_id(id).await {
        Ok(Some(_)) => (
            // 302 for a data conflict is inherited behavior; callers depend on it.
            StatusCode::FOUND,
            Json(json!({ "Message": format!("Song with id {id} already present") })),
        )
            .into_response(),
        Ok(None) => match store.insert(song).await {
            Ok(inserted_id) => {
                let inserted_id = match inserted_id {
                    Bson::ObjectId(oid) => oid.to_hex(),
                    other => other.to_string(),
                };
                (StatusCode::CREATED, Json(InsertedId { inserted_id })).into_response()
            }
            Err(err) => {
                error!("Error occurred while creating song: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        },
        Err(err) => {
            error!("Error occurred while creating song: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

pub async fn update(store: &dyn SongStore, id: i64, song: Document) -> Response {
    match store.find_by_song_id(id).await {
        Ok(Some(_)) => match store.update(id, song.clone()).await {
            // Merge semantics: the response echoes the submitted fields only.
            Ok(()) => (StatusCode::OK, Json(song)).into_response(),
            Err(err) => {
                error!("Error occurred while updating song: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        },
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "song not found" })),
        )
            .into_response(),
        Err(err) => {
            error!("Error occurred while updating song: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

pub async fn delete(store: &dyn SongStore, id: i64) -> Response {
    match store.delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "song not found" })),
        )
            .into_response(),
        Err(err) => {
            error!("Error occurred while deleting song: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}
