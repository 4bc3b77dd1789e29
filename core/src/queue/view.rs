use tracing::{debug, instrument};

use crate::{
    interact,
    model::{
        repository::{self, db::DbPool, DbError},
        QueuePage, Video, VideoStatus,
    },
};

use super::QueueError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination and filter for a queue view.
///
/// Only built through `new`, so `page` is at least 1 and `page_size` is within
/// `1..=MAX_PAGE_SIZE`. The requested values are what the client asked for before
/// defaults and clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRequest {
    page: i64,
    page_size: i64,
    status: Option<VideoStatus>,
    requested_page: Option<i64>,
    requested_page_size: Option<i64>,
}

impl QueueRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>, status: Option<VideoStatus>) -> Self {
        QueueRequest {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            status,
            requested_page: page,
            requested_page_size: page_size,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn status(&self) -> Option<VideoStatus> {
        self.status
    }

    pub fn requested_page(&self) -> Option<i64> {
        self.requested_page
    }

    pub fn requested_page_size(&self) -> Option<i64> {
        self.requested_page_size
    }

    /// True if a value the client sent was changed to fit the allowed range
    pub fn was_clamped(&self) -> bool {
        self.requested_page.is_some_and(|p| p != self.page)
            || self.requested_page_size.is_some_and(|s| s != self.page_size)
    }

    pub fn offset(&self) -> Result<i64, QueueError> {
        (self.page - 1).checked_mul(self.page_size).ok_or_else(|| {
            QueueError::validation(format!(
                "page {} with pageSize {} is out of range",
                self.page, self.page_size
            ))
        })
    }
}

impl Default for QueueRequest {
    fn default() -> Self {
        QueueRequest::new(None, None, None)
    }
}

/// Number of pages needed to show `total` items, 0 if there are none
pub(crate) fn page_count(total: i64, request: &QueueRequest) -> i64 {
    total / request.page_size + i64::from(total % request.page_size != 0)
}

/// Fetches one page of the queue, ordered processing, pending, completed and then by path,
/// and groups it by status.
///
/// The total is counted with a separate query using the same filter, so it is exact
/// even for partial or empty pages.
#[instrument(skip(pool), level = "debug")]
pub async fn get_queue_page(pool: &DbPool, request: QueueRequest) -> Result<QueuePage, QueueError> {
    let offset = request.offset()?;
    if request.was_clamped() {
        debug!(
            requested_page = ?request.requested_page,
            requested_page_size = ?request.requested_page_size,
            page = request.page,
            page_size = request.page_size,
            "Clamped pagination parameters"
        );
    }
    let status = request.status;
    let limit = request.page_size;
    let conn = pool.get().await?;
    let (total, videos) = interact!(conn, move |conn| {
        let total = repository::video::count_videos(conn, status)?;
        let videos = repository::video::get_videos_page(conn, status, offset, limit)?;
        Ok::<_, DbError>((total, videos))
    })
    .await??;
    Ok(group_by_status(videos, total, &request))
}

/// Splits an ordered page of videos into per-status buckets, keeping the order within each
pub fn group_by_status(videos: Vec<Video>, total: i64, request: &QueueRequest) -> QueuePage {
    let mut page = QueuePage {
        total,
        page: request.page,
        page_size: request.page_size,
        pages: page_count(total, request),
        ..Default::default()
    };
    for video in videos {
        match video.status {
            VideoStatus::Pending => page.pending.push(video),
            VideoStatus::Processing => page.processing.push(video),
            VideoStatus::Completed => page.completed.push(video),
        }
    }
    page
}
