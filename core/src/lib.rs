pub mod config;
pub mod model;
pub mod queue;
pub use deadpool_diesel;
