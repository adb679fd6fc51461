//! Turn monitor shared by the player threads.
//!
//! [`SharedGame`] pairs one mutex over the whole [`GameState`] with one
//! condition variable. A caller whose turn it is not parks on the condition
//! until either its turn comes up or the game ends; every applied move
//! broadcasts so both kinds of waiter re-check. The broadcast is issued
//! before the board is rendered, so a failing renderer cannot strand a waiter.

use super::action::MoveError;
use super::render::{NullRenderer, Renderer};
use super::rules;
use super::{Board, GameState, GameStatus, Move, Player, Position};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game guarded for use by concurrent players.
///
/// Share it with `Arc<SharedGame>`; all reads and writes go through the
/// internal lock, so there is a single global order of critical sections.
pub struct SharedGame {
    state: Mutex<GameState>,
    turn_changed: Condvar,
    renderer: Arc<dyn Renderer>,
}

impl SharedGame {
    /// Creates a new game that renders nothing.
    #[instrument]
    pub fn new() -> Self {
        Self::with_renderer(Arc::new(NullRenderer))
    }

    /// Creates a new game that shows the board after each applied move.
    #[instrument(skip(renderer))]
    pub fn with_renderer(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            state: Mutex::new(GameState::new()),
            turn_changed: Condvar::new(),
            renderer,
        }
    }

    /// Submits a move, blocking until it is `player`'s turn or the game ends.
    ///
    /// Returns the status after the move was applied.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game was over on entry or ended while
    ///   waiting. Nothing is changed.
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark.
    ///   Nothing is changed and it stays `player`'s turn.
    #[instrument(skip_all, fields(player = %player, position = %position))]
    pub fn try_submit(&self, player: Player, position: Position) -> Result<GameStatus, MoveError> {
        let mut state = self.lock();
        if state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if state.current_player() != player {
            debug!("Waiting for turn");
        }
        // Explicit loop: `wait_while` stops re-checking once the lock is poisoned.
        while state.current_player() != player && !state.status().is_terminal() {
            state = self
                .turn_changed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        // Woken by the game ending rather than by our turn.
        if state.status().is_terminal() {
            debug!("Game ended while waiting");
            return Err(MoveError::GameOver);
        }

        if !state.board().is_empty(position) {
            warn!("Square already occupied, try another");
            return Err(MoveError::SquareOccupied(position));
        }

        state.apply_move(position, player);
        let status = rules::evaluate(state.board(), player);
        state.set_status(status);

        if status.is_terminal() {
            info!(%status, "Game over");
        } else {
            debug!("Move applied");
        }

        // Waiters run once the guard drops, including when a renderer panic unwinds it.
        self.turn_changed.notify_all();
        self.renderer.render(state.board());
        Ok(status)
    }

    /// Submits a move; `true` if it was applied.
    ///
    /// See [`SharedGame::try_submit`] for the blocking behaviour.
    pub fn submit_move(&self, player: Player, position: Position) -> bool {
        self.try_submit(player, position).is_ok()
    }

    /// Current status. Never waits for a turn.
    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Player allowed to move next.
    pub fn current_player(&self) -> Player {
        self.lock().current_player()
    }

    /// Copy of the board.
    pub fn board(&self) -> Board {
        self.lock().board().clone()
    }

    /// Copy of the applied moves, in order.
    pub fn history(&self) -> Vec<Move> {
        self.lock().history().to_vec()
    }

    /// Copy of the whole state, taken in one critical section.
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }

    /// Acquires the state lock.
    ///
    /// Poisoning can only come from a renderer panicking after the move was
    /// fully recorded, so the inner state is still consistent.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedGame")
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}
