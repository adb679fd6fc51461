//! Command-line interface for strictly_duel.

use crate::config::{ConfigError, DuelConfig};
use crate::policy::PolicyKind;
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Strictly Duel - two player threads sharing one tic-tac-toe board
#[derive(Parser, Debug)]
#[command(name = "strictly_duel")]
#[command(about = "Two threads take turns on a shared tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML duel configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Policy for player X (overrides config)
    #[arg(long, value_enum)]
    pub player_x: Option<PolicyKind>,

    /// Policy for player O (overrides config)
    #[arg(long, value_enum)]
    pub player_o: Option<PolicyKind>,

    /// Pause after each applied move, in milliseconds (overrides config)
    #[arg(long)]
    pub pacing_ms: Option<u64>,

    /// Seed for random policies (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the board after every move
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolves the duel configuration: file first, then flag overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    #[instrument(skip(self))]
    pub fn duel_config(&self) -> Result<DuelConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DuelConfig::from_file(path)?,
            None => DuelConfig::default(),
        };
        if let Some(policy) = self.player_x {
            config = config.with_player_x(policy);
        }
        if let Some(policy) = self.player_o {
            config = config.with_player_o(policy);
        }
        if let Some(pacing_ms) = self.pacing_ms {
            config = config.with_pacing_ms(pacing_ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_default_config() {
        let cli = Cli::parse_from(["strictly_duel"]);
        assert_eq!(cli.duel_config().unwrap(), DuelConfig::default());
        assert!(!cli.quiet);
        assert!(!cli.json);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "strictly_duel",
            "--player-x",
            "random",
            "--player-o",
            "sequential",
            "--pacing-ms",
            "0",
            "--seed",
            "5",
            "--quiet",
        ]);
        let config = cli.duel_config().unwrap();
        assert_eq!(*config.player_x(), PolicyKind::Random);
        assert_eq!(*config.player_o(), PolicyKind::Sequential);
        assert_eq!(*config.pacing_ms(), 0);
        assert_eq!(*config.seed(), Some(5));
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_policy_flag_rejected() {
        assert!(Cli::try_parse_from(["strictly_duel", "--player-x", "minimax"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::parse_from(["strictly_duel", "--config", "/nonexistent/duel.toml"]);
        assert!(cli.duel_config().is_err());
    }
}
