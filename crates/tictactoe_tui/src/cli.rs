//! Command-line interface for the terminal board.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide cell numbers in empty cells
    #[arg(long)]
    pub no_hints: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if self.no_hints {
            config = config.with_hints(false);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_config_file() {
        let cli = Cli::parse_from(["tictactoe"]);
        let config = cli.load_config().expect("defaults");
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_file = \"from_file.log\"\nshow_hints = true").expect("write");

        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            path.as_str(),
            "--log-file",
            "from_cli.log",
            "--no-hints",
        ]);
        let config = cli.load_config().expect("valid config");

        assert_eq!(config.log_file(), &PathBuf::from("from_cli.log"));
        assert!(!*config.show_hints());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::parse_from(["tictactoe", "--config", "/nonexistent/tictactoe.toml"]);
        let error = cli.load_config().unwrap_err();
        assert!(error.message.contains("Failed to read config file"));
    }
}
