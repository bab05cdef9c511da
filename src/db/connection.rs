//! Opening the session's single database connection.

use anyhow::{anyhow, Context, Result};
use rusqlite::{Connection, OpenFlags};
use tracing::info;

use crate::config::Config;

/// Open the configured database and return the one connection the menu will
/// use for the whole session.
///
/// The file is opened read-write without `SQLITE_OPEN_CREATE`: the schema is
/// managed outside this program, so a missing file is a startup failure
/// rather than a silently created empty database. Foreign keys are switched on
/// so deleting an artist that still owns albums is rejected.
pub fn open_database(config: &Config) -> Result<Connection> {
    let path = &config.database;
    if !path.is_file() {
        return Err(anyhow!("database file {} does not exist", path.display()));
    }

    // No SQLITE_OPEN_URI: a path starting with `file:` is still that file.
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
    conn.execute_batch("PRAGMA foreign_keys = ON")
        .context("failed to enable foreign keys")?;

    info!(database = %path.display(), "connected");
    Ok(conn)
}
