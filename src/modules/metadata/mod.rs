use axum::routing::post;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(handler::generate))
}
