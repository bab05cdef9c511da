//! Core library surface for the Chinook artist menu.
//!
//! The binary only wires configuration, logging and stdio together; the menu
//! loop, validation and queries live here so the integration tests can drive
//! a whole session with scripted input.
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ui;

pub use config::Config;
pub use db::open_database;
pub use error::{Error, InputError};
pub use models::{Album, Artist};
pub use ui::{run_app, App, LineSource, MenuChoice, ReaderLines, ScriptedInput};
