//! Persistence module split across logical submodules.

mod albums;
mod artists;
mod connection;
mod pattern;

pub use albums::{fetch_albums_for_artist, ALBUM_LIMIT};
pub use artists::{
    artist_exists, create_artist, delete_artist, fetch_artists, search_artists, update_artist,
};
pub use connection::open_database;
pub use pattern::substring_pattern;

/// DDL of the tables this program reads and writes. Only tests execute it.
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");
