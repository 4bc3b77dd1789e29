use std::collections::HashSet;

use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use deadpool_diesel::sqlite::Object;
use eyre::Result;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::{
    interact,
    model::repository::{self, db::DbPool},
};

/// Set of paths that already have a record in the store.
///
/// Paths are only added after the corresponding insert succeeded, so the cache can lag
/// behind the store but never contains a path the store doesn't know about. A stale cache
/// makes discovery report an already queued video again, which enqueueing then rejects.
#[derive(Debug, Default)]
pub struct MembershipCache {
    paths: RwLock<HashSet<PathBuf>>,
}

impl MembershipCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        MembershipCache {
            paths: RwLock::new(paths.into_iter().collect()),
        }
    }

    pub async fn contains(&self, path: &Path) -> bool {
        self.paths.read().await.contains(path)
    }

    pub async fn add(&self, path: PathBuf) {
        self.paths.write().await.insert(path);
    }

    pub async fn len(&self) -> usize {
        self.paths.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.paths.read().await.is_empty()
    }

    /// Keeps the items whose path is not in the cache, checking all of them
    /// under a single read lock.
    pub async fn retain_unknown<T>(&self, items: Vec<T>, path_of: impl Fn(&T) -> &Path) -> Vec<T> {
        let paths = self.paths.read().await;
        items
            .into_iter()
            .filter(|item| !paths.contains(path_of(item)))
            .collect()
    }

    /// Replaces the cache contents with the paths currently in the store.
    ///
    /// The write lock is held while reading the store so no concurrent `add` gets lost.
    /// The connection is acquired before the lock, since enqueueing releases its
    /// connection before calling `add`.
    /// If the store can't be read the cache is left empty.
    #[instrument(skip_all)]
    pub async fn rebuild(&self, pool: &DbPool) {
        let conn = pool.get().await;
        let mut paths = self.paths.write().await;
        let loaded = match conn {
            Ok(conn) => load_paths(conn).await,
            Err(report) => Err(report),
        };
        match loaded {
            Ok(loaded) => {
                *paths = loaded.into_iter().collect();
                info!(count = paths.len(), "Rebuilt video path cache");
            }
            Err(report) => {
                paths.clear();
                error!(?report, "Error reading video paths from db, path cache is empty");
            }
        }
    }
}

async fn load_paths(conn: Object) -> Result<Vec<PathBuf>> {
    let paths = interact!(conn, move |conn| {
        repository::video::get_all_video_paths(conn)
    })
    .await??;
    Ok(paths)
}

#[cfg(test)]
mod test {
    use claims::assert_ok;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{repository::db, CreateVideo, VideoId};

    fn create_video(id: &str, path: &str) -> CreateVideo {
        CreateVideo {
            id: VideoId::from(id),
            path: PathBuf::from(path),
            resolution: None,
            bitrate: None,
            original_size: 100,
        }
    }

    #[tokio::test]
    async fn add_then_contains() {
        let cache = MembershipCache::new();
        assert!(!cache.contains(Path::new("videos/a.mp4")).await);
        cache.add(PathBuf::from("videos/a.mp4")).await;
        assert!(cache.contains(Path::new("videos/a.mp4")).await);
        assert!(!cache.contains(Path::new("videos/b.mp4")).await);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn retain_unknown_filters_known_paths() {
        let cache = MembershipCache::with_paths([PathBuf::from("a.mp4")]);
        let items = vec![PathBuf::from("a.mp4"), PathBuf::from("b.mp4")];
        let unknown = cache.retain_unknown(items, |p| p.as_path()).await;
        assert_eq!(unknown, vec![PathBuf::from("b.mp4")]);
    }

    #[tokio::test]
    async fn rebuild_matches_store_contents() {
        let (_dir, pool) = db::open_temp_db_pool().await;
        let conn = assert_ok!(pool.get().await);
        assert_ok!(assert_ok!(
            interact!(conn, move |conn| {
                repository::video::insert_video(conn, &create_video("a.mp4", "videos/a.mp4"))?;
                repository::video::insert_video(conn, &create_video("b.mp4", "videos/x/b.mp4"))
            })
            .await
        ));
        // stale entry with no record must disappear
        let cache = MembershipCache::with_paths([PathBuf::from("videos/gone.mp4")]);
        cache.rebuild(&pool).await;
        assert_eq!(cache.len().await, 2);
        assert!(cache.contains(Path::new("videos/a.mp4")).await);
        assert!(cache.contains(Path::new("videos/x/b.mp4")).await);
        assert!(!cache.contains(Path::new("videos/gone.mp4")).await);
    }

    #[tokio::test]
    async fn rebuild_with_unreachable_store_leaves_cache_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("does/not/exist/vidqueue.db");
        let pool = assert_ok!(db::open_db_pool(db_path.to_str().unwrap()));
        let cache = MembershipCache::with_paths([PathBuf::from("videos/a.mp4")]);
        cache.rebuild(&pool).await;
        assert!(cache.is_empty().await);
    }
}
