use tracing::{debug, info, instrument};

use crate::{
    interact,
    model::{
        repository::{self, db::DbPool, DbError},
        CreateVideo, Video,
    },
};

use super::{MembershipCache, QueueError};

/// Inserts a video into the queue with status `pending` and records its path in `cache`.
///
/// Fails with `QueueError::Conflict` if a video with the same id or path is already stored.
#[instrument(skip(pool, cache, create_video), fields(id = %create_video.id, path = %create_video.path))]
pub async fn enqueue_video(
    pool: &DbPool,
    cache: &MembershipCache,
    create_video: CreateVideo,
) -> Result<Video, QueueError> {
    validate_create_video(&create_video)?;
    let id = create_video.id.clone();
    let path = create_video.path.clone();
    let conn = pool.get().await?;
    let insert_result = interact!(conn, move |conn| {
        repository::video::insert_video(conn, &create_video)
    })
    .await?;
    // back to the pool before waiting for the cache's write lock
    drop(conn);
    let video = match insert_result {
        Ok(video) => video,
        Err(DbError::UniqueViolation(msg)) => {
            debug!(%msg, "Video already in queue");
            return Err(QueueError::Conflict { id, path });
        }
        Err(err) => return Err(err.into()),
    };
    // before returning, so that discovery can't report this path again
    cache.add(video.path.clone()).await;
    info!("Added video to queue");
    Ok(video)
}

fn validate_create_video(create_video: &CreateVideo) -> Result<(), QueueError> {
    if create_video.id.0.trim().is_empty() {
        return Err(QueueError::validation("video id must not be empty"));
    }
    if create_video.path.as_str().trim().is_empty() {
        return Err(QueueError::validation("video path must not be empty"));
    }
    if create_video.original_size < 0 {
        return Err(QueueError::validation(format!(
            "originalSize must not be negative, got {}",
            create_video.original_size
        )));
    }
    Ok(())
}
