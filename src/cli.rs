//! Process flags. They only pick where the data lives and how loud logging
//! is; the menu itself stays interactive.

use std::path::PathBuf;

use clap::Parser;

/// Interactive menu for browsing and editing the artists of a Chinook
/// database.
#[derive(Parser, Debug, Default)]
#[command(name = "chinook-menu", version, about)]
pub struct Cli {
    /// SQLite database to open (must already contain the artist/album tables).
    /// Also read from CHINOOK_DATABASE; the flag wins when both are set
    #[arg(long, short = 'd', env = "CHINOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_and_config() {
        let cli = Cli::try_parse_from([
            "chinook-menu",
            "--database",
            "/tmp/chinook.sqlite",
            "-c",
            "menu.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/chinook.sqlite")));
        assert_eq!(cli.config, Some(PathBuf::from("menu.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn database_env_var_fills_flag_and_beats_config_file() {
        use std::io::Write;

        use crate::config::Config;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"database = \"/srv/music.sqlite\"\n").unwrap();
        let config_arg = file.path().to_str().unwrap().to_string();

        std::env::set_var("CHINOOK_DATABASE", "/from/env.sqlite");
        let from_env = Cli::try_parse_from(["chinook-menu", "-c", config_arg.as_str()]);
        let from_flag = Cli::try_parse_from(["chinook-menu", "-d", "/from/flag.sqlite"]);
        std::env::remove_var("CHINOOK_DATABASE");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.database, Some(PathBuf::from("/from/env.sqlite")));
        assert_eq!(
            Config::load(&from_env).unwrap().database,
            PathBuf::from("/from/env.sqlite")
        );
        assert_eq!(
            from_flag.unwrap().database,
            Some(PathBuf::from("/from/flag.sqlite"))
        );
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["chinook-menu", "extra"]).is_err());
    }
}
