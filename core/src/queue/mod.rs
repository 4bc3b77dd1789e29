//! Queue state: which videos on disk still need processing, and the paginated,
//! status-grouped view over the ones that are tracked.

pub mod discovery;
pub mod enqueue;
mod error;
pub mod membership;
pub mod status;
pub mod view;

pub use discovery::find_unprocessed_videos;
pub use enqueue::enqueue_video;
pub use error::QueueError;
pub use membership::MembershipCache;
pub use status::{parse_status, update_video_status};
pub use view::{get_queue_page, QueueRequest};
