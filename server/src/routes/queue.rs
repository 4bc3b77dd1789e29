use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use vidqueue_core::queue::{self, QueueRequest};

use crate::{
    app_state::SharedState,
    http_error::ApiResult,
    schema::{QueueQuery, QueueResponse},
};

#[utoipa::path(get, path = "/api/queue",
    params(QueueQuery),
    responses(
        (status = 200, body = QueueResponse),
        (status = BAD_REQUEST, description = "Invalid pagination or status filter")
    ),
)]
#[instrument(fields(request = true), skip(app_state))]
pub async fn get_queue(
    Query(query): Query<QueueQuery>,
    State(app_state): State<SharedState>,
) -> ApiResult<Json<QueueResponse>> {
    let status = match query.status.as_deref() {
        None | Some("") => None,
        Some(status) => Some(queue::parse_status(status)?),
    };
    let request = QueueRequest::new(query.page, query.page_size, status);
    let page = queue::get_queue_page(&app_state.pool, request).await?;
    Ok(Json(page.into()))
}
