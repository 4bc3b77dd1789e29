use std::sync::Arc;

use camino::Utf8PathBuf as PathBuf;
use vidqueue_core::{model::repository::db::DbPool, queue::MembershipCache};

pub struct AppState {
    pub pool: DbPool,
    pub cache: MembershipCache,
    /// Directory scanned for unprocessed videos
    pub video_dir: PathBuf,
}

pub type SharedState = Arc<AppState>;
