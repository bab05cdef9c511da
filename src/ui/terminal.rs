//! Binding the menu loop to the real console.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::app::App;
use super::input::ReaderLines;

/// Run the menu against the process's stdin and stdout until the user exits.
///
/// Colours are only used when stdout is a terminal, so piped sessions stay
/// plain text.
pub fn run_app(conn: Connection) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let styled = stdout.is_terminal();

    let mut app = App::new(conn, ReaderLines::new(stdin.lock()), stdout.lock()).styled(styled);
    app.announce("Connection established")
        .context("failed to write to stdout")?;
    app.run().context("console I/O failed")
}
