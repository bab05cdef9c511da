//! Line-based console front end: the menu loop plus the pieces it is built
//! from.

mod app;
mod forms;
mod helpers;
mod input;
mod terminal;

pub use app::{App, MenuChoice};
pub use forms::{parse_artist_id, parse_name};
pub use input::{LineSource, ReaderLines, ScriptedInput};
pub use terminal::run_app;
