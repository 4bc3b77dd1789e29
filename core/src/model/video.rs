use camino::Utf8PathBuf as PathBuf;
use serde::{Deserialize, Serialize};

use super::VideoId;

/// Status of a persisted video. Anything that was discovered but not enqueued yet
/// is not stored and has no `VideoStatus`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VideoStatus {
    Pending,
    Processing,
    Completed,
}

impl VideoStatus {
    /// Position in the queue ordering, lower comes first
    pub fn rank(self) -> i32 {
        match self {
            VideoStatus::Processing => 1,
            VideoStatus::Pending => 2,
            VideoStatus::Completed => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Video {
    pub id: VideoId,
    pub path: PathBuf,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    pub status: VideoStatus,
    pub original_size: i64,
}

/// Video file found on disk that has no record yet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredVideo {
    pub id: VideoId,
    pub path: PathBuf,
    pub original_size: u64,
}

/// Everything needed to insert a video record. There is no status field,
/// new records always start out `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVideo {
    pub id: VideoId,
    pub path: PathBuf,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    pub original_size: i64,
}
