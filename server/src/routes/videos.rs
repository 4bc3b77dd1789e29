use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use tracing::instrument;

use vidqueue_core::{model::VideoId, queue};

use crate::{
    app_state::SharedState,
    http_error::ApiResult,
    schema::{EnqueueVideoRequest, UpdateStatusRequest, UpdateStatusResponse, Video},
};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/unprocessed", get(get_unprocessed_videos))
        .route("/process", post(post_enqueue_video))
        .route("/:id/status", patch(patch_video_status))
}

#[utoipa::path(get, path = "/api/videos/unprocessed",
    responses(
        (status = 200, body = [Video], description = "Video files on disk that are not queued yet"),
    ),
)]
#[instrument(fields(request = true), skip(app_state))]
pub async fn get_unprocessed_videos(
    State(app_state): State<SharedState>,
) -> ApiResult<Json<Vec<Video>>> {
    let videos: Vec<Video> = queue::find_unprocessed_videos(&app_state.video_dir, &app_state.cache)
        .await?
        .into_iter()
        .map(Video::from)
        .collect();
    Ok(Json(videos))
}

#[utoipa::path(post, path = "/api/videos/process",
    request_body = EnqueueVideoRequest,
    responses(
        (status = 200, body = Video, description = "The queued video"),
        (status = BAD_REQUEST, description = "Invalid video"),
        (status = CONFLICT, description = "Video with this id or path is already queued"),
    ),
)]
#[instrument(fields(request = true), skip(app_state))]
pub async fn post_enqueue_video(
    State(app_state): State<SharedState>,
    Json(request): Json<EnqueueVideoRequest>,
) -> ApiResult<Json<Video>> {
    let video = queue::enqueue_video(&app_state.pool, &app_state.cache, request.into()).await?;
    Ok(Json(video.into()))
}

#[utoipa::path(patch, path = "/api/videos/{id}/status",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, body = UpdateStatusResponse),
        (status = BAD_REQUEST, description = "Unknown status"),
        (status = NOT_FOUND, description = "Video not found"),
    ),
    params(
        ("id" = String, Path, description = "VideoId")
    )
)]
#[instrument(fields(request = true), skip(app_state))]
pub async fn patch_video_status(
    Path(id): Path<String>,
    State(app_state): State<SharedState>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let status = queue::parse_status(&request.status)?;
    queue::update_video_status(&app_state.pool, VideoId(id), status).await?;
    Ok(Json(UpdateStatusResponse {
        status: "updated".to_owned(),
    }))
}
