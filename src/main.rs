//! Binary entry point: resolve configuration, open the one database
//! connection, and hand it to the menu loop on stdin/stdout.
use anyhow::{anyhow, Context, Result};
use chinook_menu::cli::Cli;
use chinook_menu::{open_database, run_app, Config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so they never interleave
/// with the menu on stdout; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// A failed connection ends the process before the menu is shown.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose).context("failed to initialise logging")?;

    let config = Config::load(&cli)?;
    let conn = open_database(&config)?;
    run_app(conn)
}
