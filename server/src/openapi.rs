use utoipa::OpenApi;

use crate::{routes, schema};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::queue::get_queue,
        routes::videos::get_unprocessed_videos,
        routes::videos::post_enqueue_video,
        routes::videos::patch_video_status,
    ),
    components(schemas(
        schema::Video,
        schema::VideoStatus,
        schema::EnqueueVideoRequest,
        schema::UpdateStatusRequest,
        schema::UpdateStatusResponse,
        schema::QueueGroups,
        schema::Pagination,
        schema::QueueResponse,
    )),
    tags((name = "vidqueue"))
)]
pub struct ApiDoc;
