//! Strictly Tic-Tac-Toe - turn-synchronized game logic
//!
//! A 3x3 game that two player threads share. Each thread submits moves for
//! its own mark; the game blocks a thread until its turn comes up, rejects
//! moves on occupied squares, and stops accepting moves once a line is
//! completed or the board fills.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_tictactoe::{GameStatus, Player, Position, SharedGame};
//!
//! let game = Arc::new(SharedGame::new());
//! assert!(game.submit_move(Player::X, Position::Center));
//! assert!(!game.submit_move(Player::O, Position::Center));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod render;
pub mod rules;
mod shared;
mod types;

pub use action::MoveError;
pub use position::{Position, PositionError};
pub use render::{ConsoleRenderer, NullRenderer, Renderer};
pub use shared::SharedGame;
pub use types::{Board, GameState, GameStatus, Move, Player, Square};
