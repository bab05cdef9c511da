//! Row types that mirror the `artist` and `album` tables. They stay plain
//! data holders; the menu prints them through their `Display` impls so the
//! output format lives in one place.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `artist` table.
pub struct Artist {
    /// Caller-assigned primary key.
    pub id: i64,
    /// Free-text name. The schema allows NULL, which we read back as empty.
    pub name: String,
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, NOM: {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `album` table, as far as the album listing needs it.
pub struct Album {
    /// Primary key, printed so the user can tell same-titled albums apart.
    pub id: i64,
    /// Album title. A NULL title in the database reads back as empty.
    pub title: String,
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID_ALBUM: {}, NOM_ALBUM: {}", self.id, self.title)
    }
}
