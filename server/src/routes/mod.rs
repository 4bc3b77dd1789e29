use axum::{routing::get, Router};

use crate::app_state::SharedState;

pub mod queue;
pub mod videos;

/// Routes served below `/api`
pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/queue", get(queue::get_queue))
        .nest("/videos", videos::router())
}
