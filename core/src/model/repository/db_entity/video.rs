use std::str::FromStr;

use camino::Utf8PathBuf as PathBuf;
use diesel::{Insertable, Queryable, Selectable};
use eyre::Context;

use crate::model::{Video, VideoId, VideoStatus};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = super::super::schema::Video)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbVideo {
    pub id: String,
    pub path: String,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    pub status: String,
    pub original_size: i64,
}

impl TryFrom<DbVideo> for Video {
    type Error = eyre::Report;

    fn try_from(value: DbVideo) -> Result<Self, Self::Error> {
        let status = VideoStatus::from_str(&value.status)
            .wrap_err_with(|| format!("invalid video status '{}'", value.status))?;
        Ok(Video {
            id: VideoId(value.id),
            path: PathBuf::from(value.path),
            resolution: value.resolution,
            bitrate: value.bitrate,
            status,
            original_size: value.original_size,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = super::super::schema::Video)]
pub struct DbInsertVideo<'a> {
    pub id: &'a str,
    pub path: &'a str,
    pub resolution: Option<&'a str>,
    pub bitrate: Option<&'a str>,
    pub status: &'a str,
    pub original_size: i64,
}
