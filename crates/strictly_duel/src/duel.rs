//! Running a full duel: one shared game, two player threads.

use crate::config::DuelConfig;
use crate::driver::{ActorDriver, DriverReport};
use crate::policy::MovePolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use strictly_tictactoe::{Board, GameStatus, Move, Player, Renderer, SharedGame};
use tracing::{info, instrument};

/// Final result of a duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct DuelSummary {
    /// How the game ended.
    outcome: GameStatus,
    /// The final board.
    board: Board,
    /// Applied moves, in order.
    moves: Vec<Move>,
    /// One report per player, X first.
    reports: Vec<DriverReport>,
}

impl DuelSummary {
    /// `Draw`, `Winner: X` or `Winner: O`.
    pub fn headline(&self) -> String {
        self.outcome.to_string()
    }
}

/// Failure to run a duel to completion.
#[derive(Debug, Clone, Display, Error)]
pub enum DuelError {
    /// A player thread could not be started.
    #[display("Failed to spawn thread for player {}: {}", player, message)]
    Spawn {
        /// The player whose thread failed.
        player: Player,
        /// OS error text.
        message: String,
    },
    /// A player thread panicked.
    #[display("Player {} thread panicked", _0)]
    Panicked(#[error(not(source))] Player),
}

/// Runs a duel with the policies named in `config`.
///
/// # Errors
///
/// See [`run_duel_with`].
#[instrument(skip(renderer))]
pub fn run_duel(
    config: &DuelConfig,
    renderer: Arc<dyn Renderer>,
) -> Result<DuelSummary, DuelError> {
    let x = config.player_x().build(config.seed_x());
    let o = config.player_o().build(config.seed_o());
    run_duel_with(x, o, config.pacing(), renderer)
}

/// Runs a duel between two explicit policies.
///
/// Both players run on their own threads; this call returns after both
/// have been joined.
///
/// # Errors
///
/// Returns [`DuelError`] if a player thread cannot be spawned or panics.
#[instrument(skip_all, fields(x = policy_x.name(), o = policy_o.name()))]
pub fn run_duel_with(
    policy_x: Box<dyn MovePolicy>,
    policy_o: Box<dyn MovePolicy>,
    pacing: Duration,
    renderer: Arc<dyn Renderer>,
) -> Result<DuelSummary, DuelError> {
    let game = Arc::new(SharedGame::with_renderer(renderer));

    let x = ActorDriver::new(Player::X, policy_x, Arc::clone(&game)).with_pacing(pacing);
    let o = ActorDriver::new(Player::O, policy_o, Arc::clone(&game)).with_pacing(pacing);

    let handle_x = spawn(x)?;
    let handle_o = spawn(o)?;
    // Join both before reporting either failure.
    let report_x = join(Player::X, handle_x);
    let report_o = join(Player::O, handle_o);
    let reports = vec![report_x?, report_o?];

    let state = game.snapshot();
    info!(
        outcome = %state.status(),
        winner = ?state.status().winner(),
        moves = state.history().len(),
        "Duel finished"
    );

    Ok(DuelSummary {
        outcome: state.status(),
        board: state.board().clone(),
        moves: state.history().to_vec(),
        reports,
    })
}

fn spawn(driver: ActorDriver) -> Result<JoinHandle<DriverReport>, DuelError> {
    let player = driver.player();
    driver.spawn().map_err(|e| DuelError::Spawn {
        player,
        message: e.to_string(),
    })
}

fn join(player: Player, handle: JoinHandle<DriverReport>) -> Result<DriverReport, DuelError> {
    handle.join().map_err(|_| DuelError::Panicked(player))
}
