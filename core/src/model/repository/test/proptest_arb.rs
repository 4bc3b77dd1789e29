use camino::Utf8PathBuf as PathBuf;
use proptest::prelude::*;

use crate::model::{CreateVideo, VideoId, VideoStatus};

pub fn arb_video_status() -> impl Strategy<Value = VideoStatus> {
    prop_oneof![
        Just(VideoStatus::Pending),
        Just(VideoStatus::Processing),
        Just(VideoStatus::Completed),
    ]
}

/// Videos with distinct ids and paths, each paired with the status it should end up in
pub fn arb_videos_with_status(
    max_len: usize,
) -> impl Strategy<Value = Vec<(CreateVideo, VideoStatus)>> {
    prop::collection::btree_set("[a-z]{1,3}(/[a-z]{1,3})?", 0..max_len)
        .prop_flat_map(|names| {
            let len = names.len();
            (
                Just(names),
                prop::collection::vec(arb_video_status(), len),
                prop::collection::vec(0i64..1_000_000, len),
            )
        })
        .prop_map(|(names, statuses, sizes)| {
            names
                .into_iter()
                .zip(statuses)
                .zip(sizes)
                .map(|((name, status), size)| {
                    let path = PathBuf::from(format!("videos/{}.mp4", name));
                    let create = CreateVideo {
                        // full relative path as id so ids stay unique like paths
                        id: VideoId(format!("{}.mp4", name)),
                        path,
                        resolution: None,
                        bitrate: None,
                        original_size: size,
                    };
                    (create, status)
                })
                .collect()
        })
}
