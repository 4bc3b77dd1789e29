use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use vidqueue_core::model::QueuePage;

use super::Video;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct QueueQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Items per page between 1 and 100, defaults to 10
    pub page_size: Option<i64>,
    /// Only return videos with this status. Empty means all.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueueGroups {
    pub pending: Vec<Video>,
    pub processing: Vec<Video>,
    pub completed: Vec<Video>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueueResponse {
    pub queue: QueueGroups,
    pub pagination: Pagination,
}

impl From<QueuePage> for QueueResponse {
    fn from(value: QueuePage) -> Self {
        let convert = |videos: Vec<vidqueue_core::model::Video>| -> Vec<Video> {
            videos.into_iter().map(Video::from).collect()
        };
        QueueResponse {
            queue: QueueGroups {
                pending: convert(value.pending),
                processing: convert(value.processing),
                completed: convert(value.completed),
                total: value.total,
            },
            pagination: Pagination {
                page: value.page,
                page_size: value.page_size,
                total: value.total,
                pages: value.pages,
            },
        }
    }
}
