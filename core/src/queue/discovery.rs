use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use eyre::Context;
use tracing::{debug, instrument, trace, warn};
use walkdir::WalkDir;

use crate::model::{DiscoveredVideo, VideoId};

use super::{MembershipCache, QueueError};

/// File extensions (without the dot) of files picked up by discovery. Matched case-sensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Lists video files under `root` that have no record yet.
///
/// Any error while walking the directory tree aborts the whole scan.
/// The order of the returned videos is the directory traversal order.
#[instrument(skip(cache))]
pub async fn find_unprocessed_videos(
    root: &Path,
    cache: &MembershipCache,
) -> Result<Vec<DiscoveredVideo>, QueueError> {
    let root_owned = root.to_owned();
    let found = tokio::task::spawn_blocking(move || walk_video_files(&root_owned))
        .await
        .wrap_err("directory walk task failed")??;
    let found_count = found.len();
    let unprocessed = cache.retain_unknown(found, |video| video.path.as_path()).await;
    debug!(
        found = found_count,
        unprocessed = unprocessed.len(),
        "Scanned video directory"
    );
    Ok(unprocessed)
}

/// Walks `root` recursively and returns every regular file with a video extension.
/// Symlinks are not followed.
pub fn walk_video_files(root: &Path) -> Result<Vec<DiscoveredVideo>, QueueError> {
    let mut videos = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| QueueError::Filesystem {
            root: root.to_owned(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(path) = Path::from_path(entry.path()) else {
            warn!(path = ?entry.path(), "Ignoring file with non UTF-8 path");
            continue;
        };
        if !has_video_extension(path) {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        // a file we can't stat is still listed, just without a size
        let original_size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                trace!(%path, %err, "Could not read file size");
                0
            }
        };
        videos.push(DiscoveredVideo {
            id: VideoId::from(file_name),
            path: path.to_owned(),
            original_size,
        });
    }
    Ok(videos)
}

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
