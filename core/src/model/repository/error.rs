use diesel::result::DatabaseErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// Query that should affect or produce exactly one row did not find any (e.g., by id)
    #[error("Expected exactly 1 query result row, got 0")]
    RowNotFound,
    /// Insert collided with an existing primary key or unique column
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    /// Failed to convert db row to model type
    #[error("Invalid row: {0:#}")]
    InvalidRow(eyre::Report),
    #[error(transparent)]
    Other(diesel::result::Error),
}

impl From<diesel::result::Error> for DbError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => DbError::RowNotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                DbError::UniqueViolation(info.message().to_owned())
            }
            other => DbError::Other(other),
        }
    }
}

impl From<eyre::Report> for DbError {
    fn from(value: eyre::Report) -> Self {
        DbError::InvalidRow(value)
    }
}
