use axum::routing::post;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(handler::upload_video))
}
