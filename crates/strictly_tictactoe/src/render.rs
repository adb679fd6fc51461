//! Board rendering seam.
//!
//! The shared game hands every post-move board to a [`Renderer`]. Renderers
//! only read; nothing they do feeds back into the game.

use super::Board;
use std::io::Write;
use tracing::warn;

/// Consumer of board snapshots.
///
/// Called while the game lock is held, so calls arrive in the order moves
/// were applied and never overlap.
pub trait Renderer: Send + Sync {
    /// Shows the board.
    fn render(&self, board: &Board);
}

/// Prints the board to stdout followed by a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, board: &Board) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{board}") {
            warn!(error = %e, "Failed to render board");
        }
    }
}

/// Discards every board.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _board: &Board) {}
}
