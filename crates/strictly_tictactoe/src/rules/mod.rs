//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The shared game calls [`evaluate`]
//! once per applied move while it still holds the lock.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_won};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Status of the game right after `mover` placed a mark.
///
/// Only the mover can have completed a line with that mark, so only the
/// mover's lines are checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> GameStatus {
    if has_won(board, mover) {
        GameStatus::Won(mover)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_evaluate_in_progress() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(evaluate(&board, Player::X), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_beats_full_board() {
        // X O X / O X O / O X X, last mark completes the main diagonal
        #[rustfmt::skip]
        let layout = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::O,
            Player::O, Player::X, Player::X,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board, Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_evaluate_full_board_without_line_is_draw() {
        // X O O / O X X / X X O
        #[rustfmt::skip]
        let layout = [
            Player::X, Player::O, Player::O,
            Player::O, Player::X, Player::X,
            Player::X, Player::X, Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board, Player::X), GameStatus::Draw);
        assert!(is_draw(&board));
    }
}
