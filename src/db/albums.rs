//! Read-only album lookup. Albums are never written by this program.

use rusqlite::{params, Connection};
use tracing::debug;

use super::pattern::substring_pattern;
use crate::error::Result;
use crate::models::Album;

/// Most albums the album lookup ever returns. Bound as a query parameter so
/// the cap is enforced by SQLite, not by truncating in Rust.
pub const ALBUM_LIMIT: i64 = 5;

/// Albums of every artist whose name contains `needle` (case-sensitive),
/// at most [`ALBUM_LIMIT`] of them, lowest album id first.
pub fn fetch_albums_for_artist(conn: &Connection, needle: &str) -> Result<Vec<Album>> {
    let mut stmt = conn.prepare(
        "SELECT al.album_id, al.title
         FROM album al
         INNER JOIN artist ar ON al.artist_id = ar.artist_id
         WHERE ar.name GLOB ?1
         ORDER BY al.album_id
         LIMIT ?2",
    )?;

    let albums = stmt
        .query_map(params![substring_pattern(needle), ALBUM_LIMIT], |row| {
            Ok(Album {
                id: row.get(0)?,
                title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(needle, count = albums.len(), "fetched albums");
    Ok(albums)
}
