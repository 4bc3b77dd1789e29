use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a tracked video, derived from its file name at discovery time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VideoId(pub String);

impl From<String> for VideoId {
    fn from(value: String) -> Self {
        VideoId(value)
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        VideoId(value.to_owned())
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
