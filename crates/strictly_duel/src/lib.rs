//! Strictly Duel - two player threads, one board
//!
//! Each player runs on its own thread with its own [`MovePolicy`] and
//! submits moves to a shared [`strictly_tictactoe::SharedGame`]. The game
//! enforces turn order, so the players never coordinate directly.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_duel::{DuelConfig, PolicyKind, run_duel};
//! use strictly_tictactoe::NullRenderer;
//!
//! let config = DuelConfig::new(PolicyKind::Sequential, PolicyKind::Random, 0, Some(1));
//! let summary = run_duel(&config, Arc::new(NullRenderer)).unwrap();
//! assert!(summary.outcome().is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod duel;
mod policy;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_PACING_MS, DuelConfig};
pub use driver::{ActorDriver, DEFAULT_PACING, DriverReport};
pub use duel::{DuelError, DuelSummary, run_duel, run_duel_with};
pub use policy::{ExhaustiveScan, MovePolicy, PolicyKind, Scripted, UniformRandom};
