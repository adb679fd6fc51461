//! Player threads.
//!
//! An [`ActorDriver`] owns one mark and one policy and keeps feeding the
//! policy's candidates into the shared game until the game ends or the
//! policy runs dry. Drivers never talk to each other; the shared game is the
//! only thing they have in common.

use crate::config::DEFAULT_PACING_MS;
use crate::policy::MovePolicy;
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use strictly_tictactoe::{MoveError, Player, SharedGame};
use tracing::{debug, info, instrument};

/// Pause after each applied move.
pub const DEFAULT_PACING: Duration = Duration::from_millis(DEFAULT_PACING_MS);

/// What one player did during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct DriverReport {
    /// The driver's mark.
    player: Player,
    /// Moves the game accepted.
    moves_applied: usize,
    /// Candidates the game turned down.
    moves_rejected: usize,
}

/// Drives one player against a shared game.
pub struct ActorDriver {
    player: Player,
    policy: Box<dyn MovePolicy>,
    game: Arc<SharedGame>,
    pacing: Duration,
}

impl ActorDriver {
    /// Creates a driver for `player` with the default pacing.
    #[instrument(skip(policy, game), fields(policy = policy.name()))]
    pub fn new(player: Player, policy: Box<dyn MovePolicy>, game: Arc<SharedGame>) -> Self {
        Self {
            player,
            policy,
            game,
            pacing: DEFAULT_PACING,
        }
    }

    /// Sets the pause taken after each applied move.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// The driver's mark.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Plays until the game is over or the policy is exhausted.
    #[instrument(skip(self), fields(player = %self.player, policy = self.policy.name()))]
    pub fn run(mut self) -> DriverReport {
        info!("Player started");
        let mut applied = 0;
        let mut rejected = 0;

        while !self.game.is_over() {
            let Some(position) = self.policy.next_candidate(self.player) else {
                debug!("Policy exhausted");
                break;
            };

            match self.game.try_submit(self.player, position) {
                Ok(status) => {
                    applied += 1;
                    debug!(%position, %status, "Move applied");
                    if !self.pacing.is_zero() {
                        thread::sleep(self.pacing);
                    }
                }
                Err(MoveError::SquareOccupied(_)) => rejected += 1,
                Err(MoveError::GameOver) => {
                    rejected += 1;
                    break;
                }
            }
        }

        info!(applied, rejected, "Player finished");
        DriverReport::new(self.player, applied, rejected)
    }

    /// Runs the driver on its own named thread.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be created.
    pub fn spawn(self) -> std::io::Result<JoinHandle<DriverReport>> {
        let name = format!("player-{}", self.player).to_lowercase();
        thread::Builder::new().name(name).spawn(move || self.run())
    }
}

impl std::fmt::Debug for ActorDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorDriver")
            .field("player", &self.player)
            .field("policy", &self.policy.name())
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}
