//! Error types shared by the persistence layer and the menu.

use thiserror::Error;

/// Minimum number of characters accepted for an artist name or search term.
pub const MIN_NAME_CHARS: usize = 2;

/// Rejections produced while validating what the user typed. None of these
/// ever reach the database.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter at least {} characters", MIN_NAME_CHARS)]
    NameTooShort,

    #[error("Error: the ID must be an integer (got '{0}')")]
    InvalidId(String),
}

/// Failures of a single artist/album operation. The menu prints them and
/// carries on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: an artist with ID {0} already exists")]
    DuplicateId(i64),

    #[error("Artist not found")]
    NotFound(i64),

    #[error("Error adding the artist")]
    NotInserted(i64),

    #[error("Error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
