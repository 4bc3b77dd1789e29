pub mod db;
pub mod db_entity;
pub mod error;
#[allow(non_snake_case)]
mod schema;
#[cfg(test)]
mod test;
pub mod video;

pub use error::DbError;

/// Runs a closure taking `&mut DbConn` on a pooled connection.
/// Evaluates to `eyre::Result<T>` where `T` is what the closure returns.
#[macro_export]
macro_rules! interact {
    ($conn:ident, $block:expr) => {
        tracing::Instrument::in_current_span(<_ as futures::TryFutureExt>::map_err(
            $conn.interact($block),
            |err| match err {
                $crate::deadpool_diesel::InteractError::Panic(_) => {
                    eyre::eyre!("database interaction panicked")
                }
                $crate::deadpool_diesel::InteractError::Aborted => {
                    eyre::eyre!("database interaction was aborted")
                }
            },
        ))
    };
}
