//! Duel configuration.

use crate::policy::PolicyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default pause after each applied move, in milliseconds.
pub const DEFAULT_PACING_MS: u64 = 500;

/// Settings for one duel between two player threads.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Policy for X (moves first).
    player_x: PolicyKind,

    /// Policy for O.
    player_o: PolicyKind,

    /// Pause after each applied move, in milliseconds.
    pacing_ms: u64,

    /// Seed for random policies. X uses the seed, O uses seed + 1.
    seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            player_x: PolicyKind::Sequential,
            player_o: PolicyKind::Random,
            pacing_ms: DEFAULT_PACING_MS,
            seed: None,
        }
    }
}

impl DuelConfig {
    /// Creates a configuration.
    pub fn new(
        player_x: PolicyKind,
        player_o: PolicyKind,
        pacing_ms: u64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            player_x,
            player_o,
            pacing_ms,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces the policy for X.
    pub fn with_player_x(mut self, policy: PolicyKind) -> Self {
        self.player_x = policy;
        self
    }

    /// Replaces the policy for O.
    pub fn with_player_o(mut self, policy: PolicyKind) -> Self {
        self.player_o = policy;
        self
    }

    /// Replaces the pacing.
    pub fn with_pacing_ms(mut self, pacing_ms: u64) -> Self {
        self.pacing_ms = pacing_ms;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pause after each applied move.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Seed for X's random policy.
    pub fn seed_x(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for O's random policy, distinct from X's.
    pub fn seed_o(&self) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(1))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
