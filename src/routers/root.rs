use axum::{extract::State, response::Response};

use crate::controllers;
use crate::db::DynStore;

pub async fn health_route(State(_store): State<DynStore>) -> Response {
    controllers::root::health().await
}
