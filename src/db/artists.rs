//! Queries against the `artist` table. Each function prepares, runs, and
//! drops its own statement; the caller only lends the connection.

use rusqlite::{params, Connection, Error as SqlError, ErrorCode, Row};
use tracing::debug;

use super::pattern::substring_pattern;
use crate::error::{Error, Result};
use crate::models::Artist;

/// Map an `artist_id, name` row. A NULL name reads back as empty text so a
/// hand-edited row never breaks the listing.
fn artist_from_row(row: &Row<'_>) -> rusqlite::Result<Artist> {
    Ok(Artist {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
    })
}

/// Every artist, ordered by ascending id. The listing and the tests rely on
/// this order, so it is fixed in SQL rather than left to the planner.
pub fn fetch_artists(conn: &Connection) -> Result<Vec<Artist>> {
    let mut stmt = conn.prepare("SELECT artist_id, name FROM artist ORDER BY artist_id")?;
    let artists = stmt
        .query_map([], artist_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(count = artists.len(), "fetched artists");
    Ok(artists)
}

/// Artists whose name contains `needle`, compared case-sensitively.
pub fn search_artists(conn: &Connection, needle: &str) -> Result<Vec<Artist>> {
    let mut stmt = conn.prepare(
        "SELECT artist_id, name FROM artist
         WHERE name GLOB ?1
         ORDER BY artist_id",
    )?;
    let artists = stmt
        .query_map([substring_pattern(needle)], artist_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(needle, count = artists.len(), "searched artists");
    Ok(artists)
}

/// Whether a row with this id is already present. Used as the duplicate
/// guard before inserting.
pub fn artist_exists(conn: &Connection, id: i64) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM artist WHERE artist_id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a new artist under a caller-chosen id.
///
/// Uniqueness is checked with a lookup before the insert. Between the two
/// statements another writer could claim the id; that case surfaces as a
/// primary-key violation, which is reported as the same duplicate error.
pub fn create_artist(conn: &Connection, id: i64, name: &str) -> Result<Artist> {
    if artist_exists(conn, id)? {
        return Err(Error::DuplicateId(id));
    }

    let inserted = conn
        .execute(
            "INSERT INTO artist (artist_id, name) VALUES (?1, ?2)",
            params![id, name],
        )
        .map_err(|err| map_unique_constraint(err, id))?;

    if inserted == 0 {
        return Err(Error::NotInserted(id));
    }

    debug!(id, "inserted artist");
    Ok(Artist {
        id,
        name: name.to_string(),
    })
}

/// Rename the artist with the given id. Zero touched rows surface as
/// [`Error::NotFound`] so the menu can say so instead of claiming success.
pub fn update_artist(conn: &Connection, id: i64, name: &str) -> Result<()> {
    let updated = conn.execute(
        "UPDATE artist SET name = ?1 WHERE artist_id = ?2",
        params![name, id],
    )?;

    if updated == 0 {
        Err(Error::NotFound(id))
    } else {
        debug!(id, "updated artist");
        Ok(())
    }
}

/// Remove the artist with the given id. Albums still pointing at it make the
/// delete fail with a foreign-key error.
pub fn delete_artist(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn.execute("DELETE FROM artist WHERE artist_id = ?1", params![id])?;

    if deleted == 0 {
        Err(Error::NotFound(id))
    } else {
        debug!(id, "deleted artist");
        Ok(())
    }
}

/// Turn a primary-key violation on insert into [`Error::DuplicateId`]; any
/// other failure stays a database error.
fn map_unique_constraint(err: SqlError, id: i64) -> Error {
    match err.sqlite_error() {
        Some(code)
            if code.code == ErrorCode::ConstraintViolation
                && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            Error::DuplicateId(id)
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{artist_count, seeded_connection};

    #[test]
    fn lists_artists_in_id_order() {
        let conn = seeded_connection();
        conn.execute("INSERT INTO artist VALUES (0, 'Zero')", []).unwrap();

        let ids: Vec<i64> = fetch_artists(&conn).unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn search_is_case_sensitive() {
        let conn = seeded_connection();

        assert!(search_artists(&conn, "acc").unwrap().is_empty());

        let found = search_artists(&conn, "Acc").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Accept");

        let both = search_artists(&conn, "A").unwrap();
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let conn = seeded_connection();
        assert!(search_artists(&conn, "A*").unwrap().is_empty());
        assert_eq!(search_artists(&conn, "C/D").unwrap()[0].id, 1);
    }

    #[test]
    fn create_rejects_existing_id_and_keeps_row() {
        let conn = seeded_connection();

        let err = create_artist(&conn, 1, "Impostor").unwrap_err();
        assert!(matches!(err, Error::DuplicateId(1)));

        let name: String = conn
            .query_row("SELECT name FROM artist WHERE artist_id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(name, "AC/DC");
        assert_eq!(artist_count(&conn), 2);
    }

    #[test]
    fn create_then_exists() {
        let conn = seeded_connection();
        assert!(!artist_exists(&conn, 100).unwrap());

        let artist = create_artist(&conn, 100, "Test").unwrap();
        assert_eq!(artist.to_string(), "ID: 100, NOM: Test");
        assert!(artist_exists(&conn, 100).unwrap());
    }

    #[test]
    fn primary_key_violation_maps_to_duplicate() {
        let conn = seeded_connection();
        let err = conn
            .execute("INSERT INTO artist (artist_id, name) VALUES (2, 'x')", [])
            .unwrap_err();
        assert!(matches!(map_unique_constraint(err, 2), Error::DuplicateId(2)));
    }

    #[test]
    fn update_touches_only_target_row() {
        let conn = seeded_connection();
        update_artist(&conn, 2, "Accept (DE)").unwrap();

        let artists = fetch_artists(&conn).unwrap();
        assert_eq!(
            artists,
            vec![
                Artist { id: 1, name: "AC/DC".into() },
                Artist { id: 2, name: "Accept (DE)".into() },
            ]
        );
    }

    #[test]
    fn update_missing_is_not_found() {
        let conn = seeded_connection();
        assert!(matches!(update_artist(&conn, 99, "Nobody"), Err(Error::NotFound(99))));
    }

    #[test]
    fn delete_missing_keeps_count() {
        let conn = seeded_connection();
        assert!(matches!(delete_artist(&conn, 99), Err(Error::NotFound(99))));
        assert_eq!(artist_count(&conn), 2);
    }

    #[test]
    fn delete_with_albums_is_rejected() {
        let conn = seeded_connection();
        conn.execute("INSERT INTO album VALUES (1, 'High Voltage', 1)", [])
            .unwrap();

        assert!(matches!(delete_artist(&conn, 1), Err(Error::Database(_))));
        delete_artist(&conn, 2).unwrap();
        assert_eq!(artist_count(&conn), 1);
    }
}
