//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Whether this error means a requested record simply does not exist.
    ///
    /// Optional rows (profile, settings) use this to fall back to defaults
    /// instead of surfacing a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
            || matches!(self, Error::Database(rusqlite::Error::QueryReturnedNoRows))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
