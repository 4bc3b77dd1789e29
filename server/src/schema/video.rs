use camino::Utf8PathBuf as PathBuf;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vidqueue_core::model;

/// Status as reported to clients. `unprocessed` is never stored, it marks videos
/// found on disk that have not been queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Unprocessed,
    Pending,
    Processing,
    Completed,
}

impl From<model::VideoStatus> for VideoStatus {
    fn from(value: model::VideoStatus) -> Self {
        match value {
            model::VideoStatus::Pending => VideoStatus::Pending,
            model::VideoStatus::Processing => VideoStatus::Processing,
            model::VideoStatus::Completed => VideoStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[schema(value_type = String)]
    pub path: PathBuf,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    pub status: VideoStatus,
    pub original_size: i64,
}

impl From<model::Video> for Video {
    fn from(value: model::Video) -> Self {
        Video {
            id: value.id.0,
            path: value.path,
            resolution: value.resolution,
            bitrate: value.bitrate,
            status: value.status.into(),
            original_size: value.original_size,
        }
    }
}

impl From<model::DiscoveredVideo> for Video {
    fn from(value: model::DiscoveredVideo) -> Self {
        Video {
            id: value.id.0,
            path: value.path,
            resolution: None,
            bitrate: None,
            status: VideoStatus::Unprocessed,
            original_size: i64::try_from(value.original_size).unwrap_or(i64::MAX),
        }
    }
}

/// Body of an enqueue request. A `status` field, if present, is ignored:
/// queued videos always start out pending.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueVideoRequest {
    pub id: String,
    #[schema(value_type = String)]
    pub path: PathBuf,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    #[serde(default)]
    pub original_size: i64,
}

impl From<EnqueueVideoRequest> for model::CreateVideo {
    fn from(value: EnqueueVideoRequest) -> Self {
        model::CreateVideo {
            id: model::VideoId(value.id),
            path: value.path,
            resolution: value.resolution,
            bitrate: value.bitrate,
            original_size: value.original_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of `pending`, `processing`, `completed`
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub status: String,
}
