use axum::routing::get;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(handler::list_jobs).post(handler::schedule_job))
        .route("/jobs", get(handler::list_jobs))
}
