//! The single validation step every operation runs its raw input through
//! before touching the database.

use crate::error::{InputError, MIN_NAME_CHARS};

/// Parse an artist id. Surrounding whitespace is ignored.
pub fn parse_artist_id(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidId(trimmed.to_string()))
}

/// Accept a name or search term of at least [`MIN_NAME_CHARS`] characters.
///
/// The text is kept as typed; length counts characters, not bytes.
pub fn parse_name(raw: &str) -> Result<&str, InputError> {
    if raw.chars().count() < MIN_NAME_CHARS {
        Err(InputError::NameTooShort)
    } else {
        Ok(raw)
    }
}
