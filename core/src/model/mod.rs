pub mod repository;

mod id_types;
mod queue_page;
mod video;
pub use id_types::*;
pub use queue_page::*;
pub use video::*;
