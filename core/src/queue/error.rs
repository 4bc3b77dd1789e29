use camino::Utf8PathBuf as PathBuf;

use crate::model::{repository::DbError, VideoId};

#[derive(thiserror::Error, Debug)]
pub enum QueueError {
    #[error("Error reading directory {root}: {source}")]
    Filesystem {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Video with id '{0}' does not exist")]
    NotFound(VideoId),
    #[error("Video '{id}' with path '{path}' is already queued")]
    Conflict { id: VideoId, path: PathBuf },
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error(transparent)]
    Store {
        #[from]
        source: eyre::Report,
    },
}

impl QueueError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<DbError> for QueueError {
    fn from(value: DbError) -> Self {
        QueueError::Store {
            source: eyre::Report::new(value),
        }
    }
}
