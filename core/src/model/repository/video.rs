use camino::Utf8PathBuf as PathBuf;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::Sqlite;
use tracing::instrument;

use crate::model::{CreateVideo, Video, VideoId, VideoStatus};

use super::db::DbConn;
use super::db_entity::{DbInsertVideo, DbVideo};
use super::error::DbError;
use super::schema;

/// Ranks rows by status for queue ordering. Must agree with `VideoStatus::rank`.
const STATUS_RANK_SQL: &str = "CASE status \
    WHEN 'processing' THEN 1 \
    WHEN 'pending' THEN 2 \
    WHEN 'completed' THEN 3 \
    ELSE 4 END";

/// Inserts a new video with status `pending` and returns the stored row.
/// Fails with `DbError::UniqueViolation` if the id or path is already taken.
#[instrument(skip(conn), level = "debug")]
pub fn insert_video(conn: &mut DbConn, create_video: &CreateVideo) -> Result<Video, DbError> {
    use schema::Video;
    let pending = VideoStatus::Pending.to_string();
    let db_video: DbVideo = diesel::insert_into(Video::table)
        .values(DbInsertVideo {
            id: &create_video.id.0,
            path: create_video.path.as_str(),
            resolution: create_video.resolution.as_deref(),
            bitrate: create_video.bitrate.as_deref(),
            status: &pending,
            original_size: create_video.original_size,
        })
        .returning(DbVideo::as_returning())
        .get_result(conn)?;
    Ok(db_video.try_into()?)
}

#[instrument(skip(conn), level = "trace")]
pub fn get_video(conn: &mut DbConn, id: &VideoId) -> Result<Video, DbError> {
    use schema::Video;
    let db_video: DbVideo = Video::table
        .find(id.0.as_str())
        .select(DbVideo::as_select())
        .first(conn)?;
    Ok(db_video.try_into()?)
}

/// Paths of all stored videos, used to fill the membership cache
#[instrument(skip(conn), level = "debug")]
pub fn get_all_video_paths(conn: &mut DbConn) -> Result<Vec<PathBuf>, DbError> {
    use schema::Video;
    let paths: Vec<String> = Video::table.select(Video::path).distinct().load(conn)?;
    Ok(paths.into_iter().map(PathBuf::from).collect())
}

fn videos_with_status(status: Option<VideoStatus>) -> schema::Video::BoxedQuery<'static, Sqlite> {
    use schema::Video;
    let mut query = Video::table.into_boxed();
    if let Some(status) = status {
        query = query.filter(Video::status.eq(status.to_string()));
    }
    query
}

#[instrument(skip(conn), level = "trace")]
pub fn count_videos(conn: &mut DbConn, status: Option<VideoStatus>) -> Result<i64, DbError> {
    let count: i64 = videos_with_status(status).count().get_result(conn)?;
    Ok(count)
}

/// Videos matching `status` (all videos if `None`) ordered processing, pending, completed,
/// then by path.
#[instrument(skip(conn), level = "trace")]
pub fn get_videos_page(
    conn: &mut DbConn,
    status: Option<VideoStatus>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Video>, DbError> {
    use schema::Video;
    let db_videos: Vec<DbVideo> = videos_with_status(status)
        .select(DbVideo::as_select())
        .order_by((sql::<Integer>(STATUS_RANK_SQL), Video::path.asc()))
        .offset(offset)
        .limit(limit)
        .load(conn)?;
    db_videos
        .into_iter()
        .map(|db_video| db_video.try_into().map_err(DbError::InvalidRow))
        .collect()
}

/// Overwrites the status of the video with `id`.
/// Returns `DbError::RowNotFound` if no row was updated.
#[instrument(skip(conn), level = "debug")]
pub fn update_video_status(
    conn: &mut DbConn,
    id: &VideoId,
    status: VideoStatus,
) -> Result<(), DbError> {
    use schema::Video;
    let rows_affected = diesel::update(Video::table.find(id.0.as_str()))
        .set(Video::status.eq(status.to_string()))
        .execute(conn)?;
    if rows_affected == 0 {
        return Err(DbError::RowNotFound);
    }
    Ok(())
}
