use std::str::FromStr;

use tracing::{info, instrument};

use crate::{
    interact,
    model::{
        repository::{self, db::DbPool, DbError},
        VideoId, VideoStatus,
    },
};

use super::QueueError;

/// Parses a status value coming from a client. Only the three stored statuses are accepted.
pub fn parse_status(status: &str) -> Result<VideoStatus, QueueError> {
    VideoStatus::from_str(status).map_err(|_| {
        QueueError::validation(format!(
            "unknown status '{}', expected one of pending, processing, completed",
            status
        ))
    })
}

/// Sets the status of the video with `id`. Any status can follow any other.
#[instrument(skip(pool))]
pub async fn update_video_status(
    pool: &DbPool,
    id: VideoId,
    status: VideoStatus,
) -> Result<(), QueueError> {
    let conn = pool.get().await?;
    let id_copy = id.clone();
    let update_result = interact!(conn, move |conn| {
        repository::video::update_video_status(conn, &id_copy, status)
    })
    .await?;
    match update_result {
        Ok(()) => {
            info!("Updated video status");
            Ok(())
        }
        Err(DbError::RowNotFound) => Err(QueueError::NotFound(id)),
        Err(err) => Err(err.into()),
    }
}
