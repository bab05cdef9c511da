//! The menu loop: prompts, dispatch, and the six artist/album operations.
//! Every failure inside an operation ends as a one-line notice; only console
//! I/O errors leave the loop.

use std::fmt::Display;
use std::io::{self, Write};

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::{
    create_artist, delete_artist, fetch_albums_for_artist, fetch_artists, search_artists,
    update_artist,
};
use crate::error::{Error, InputError};

use super::forms::{parse_artist_id, parse_name};
use super::helpers::{write_status, StatusKind};
use super::input::LineSource;

/// Menu printed before every choice prompt.
const MENU: &str = "\n1. List artists\n2. Search artists\n3. List albums\n4. Add artist\n5. Modify artist\n6. Delete artist\n0. Exit";
/// Notice printed when a query comes back empty.
const NO_RESULTS: &str = "No results.";

/// The entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListArtists,
    SearchArtists,
    ListAlbums,
    AddArtist,
    ModifyArtist,
    DeleteArtist,
    Exit,
}

impl MenuChoice {
    /// Map a typed option number to its entry. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::ListArtists),
            "2" => Some(Self::SearchArtists),
            "3" => Some(Self::ListAlbums),
            "4" => Some(Self::AddArtist),
            "5" => Some(Self::ModifyArtist),
            "6" => Some(Self::DeleteArtist),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps prompting after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The menu loop. Owns the session's only database connection and talks to
/// the user through an injected line source and writer.
pub struct App<L, W> {
    conn: Connection,
    input: L,
    out: W,
    styled: bool,
}

impl<L: LineSource, W: Write> App<L, W> {
    /// Build a loop around an open connection. Output starts unstyled so
    /// captured sessions compare as plain text; see [`App::styled`].
    pub fn new(conn: Connection, input: L, out: W) -> Self {
        Self {
            conn,
            input,
            out,
            styled: false,
        }
    }

    /// Colour notices with terminal escape codes.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Borrow the connection, e.g. to inspect the tables after a session.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Everything written so far, when the writer is an in-memory buffer.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Print a free-standing notice outside of the loop, e.g. the greeting.
    pub fn announce(&mut self, text: impl Display) -> io::Result<()> {
        self.status(StatusKind::Success, text)
    }

    /// Show the menu and dispatch choices until the user picks exit or the
    /// input runs out. Database failures are reported and swallowed; only
    /// console I/O errors end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(raw) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(MenuChoice::Exit) => Flow::Exit,
                Some(choice) => {
                    debug!(?choice, "dispatching menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    self.status(StatusKind::Error, "Invalid option")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        debug!("menu loop finished");
        Ok(())
    }

    /// Run one operation. Returns `Exit` only when input ran out mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::ListArtists => self.list_artists(),
            MenuChoice::SearchArtists => self.search_artists(),
            MenuChoice::ListAlbums => self.list_albums(),
            MenuChoice::AddArtist => self.add_artist(),
            MenuChoice::ModifyArtist => self.modify_artist(),
            MenuChoice::DeleteArtist => self.delete_artist(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn list_artists(&mut self) -> io::Result<Flow> {
        match fetch_artists(&self.conn) {
            Ok(artists) => self.print_rows(&artists)?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn search_artists(&mut self) -> io::Result<Flow> {
        let Some(raw) = self.prompt("Enter the artist name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.validated(parse_name(&raw))? else {
            return Ok(Flow::Continue);
        };

        match search_artists(&self.conn, name) {
            Ok(artists) => self.print_rows(&artists)?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn list_albums(&mut self) -> io::Result<Flow> {
        let Some(raw) = self.prompt("Enter the artist name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.validated(parse_name(&raw))? else {
            return Ok(Flow::Continue);
        };

        match fetch_albums_for_artist(&self.conn, name) {
            Ok(albums) => self.print_rows(&albums)?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn add_artist(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter the new artist's ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.validated(parse_artist_id(&raw_id))? else {
            return Ok(Flow::Continue);
        };
        let Some(raw_name) = self.prompt("Enter the new artist's name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.validated(parse_name(&raw_name))? else {
            return Ok(Flow::Continue);
        };

        match create_artist(&self.conn, id, name) {
            Ok(_) => self.status(StatusKind::Success, "Artist added successfully")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn modify_artist(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter the artist's ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.validated(parse_artist_id(&raw_id))? else {
            return Ok(Flow::Continue);
        };
        let Some(raw_name) = self.prompt("Enter the artist's new name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.validated(parse_name(&raw_name))? else {
            return Ok(Flow::Continue);
        };

        match update_artist(&self.conn, id, name) {
            Ok(()) => self.status(StatusKind::Success, "Artist modified successfully")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_artist(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter the ID of the artist to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.validated(parse_artist_id(&raw_id))? else {
            return Ok(Flow::Continue);
        };

        match delete_artist(&self.conn, id) {
            Ok(()) => self.status(StatusKind::Success, "Artist deleted successfully")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    /// Print `label` without a newline and wait for one line of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let line = self.input.read_line()?;
        if line.is_none() {
            // Keep the terminal tidy when stdin closes mid-prompt.
            writeln!(self.out)?;
        }
        Ok(line)
    }

    /// Unwrap a validation result, printing the rejection if there is one.
    fn validated<T>(&mut self, parsed: Result<T, InputError>) -> io::Result<Option<T>> {
        match parsed {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(%err, "rejected input");
                self.status(StatusKind::Error, err)?;
                Ok(None)
            }
        }
    }

    /// One line per row, or the empty-result notice.
    fn print_rows<T: Display>(&mut self, rows: &[T]) -> io::Result<()> {
        if rows.is_empty() {
            return self.status(StatusKind::Info, NO_RESULTS);
        }
        for row in rows {
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }

    /// Print an operation failure; database errors are also logged.
    fn report(&mut self, err: Error) -> io::Result<()> {
        if let Error::Database(source) = &err {
            warn!(error = %source, "query failed");
        }
        self.status(StatusKind::Error, err)
    }

    fn status(&mut self, kind: StatusKind, text: impl Display) -> io::Result<()> {
        write_status(&mut self.out, self.styled, kind, text)
    }
}
