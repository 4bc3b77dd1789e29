use super::Video;

/// One page of the queue, grouped by status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueuePage {
    pub pending: Vec<Video>,
    pub processing: Vec<Video>,
    pub completed: Vec<Video>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub pages: i64,
}

impl QueuePage {
    /// Number of videos on this page across all buckets
    pub fn len(&self) -> usize {
        self.pending.len() + self.processing.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
