pub mod queue;
pub mod video;
pub use queue::*;
pub use video::*;
