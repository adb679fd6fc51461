//! Move policies: where a player tries to move next.
//!
//! A policy only proposes squares. The shared game decides whether a
//! proposal is legal, so policies never look at the board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Player, Position};
use tracing::{error, instrument};

/// Source of candidate squares for one player.
pub trait MovePolicy: Send {
    /// Next square to try, or `None` once the policy has nothing left to offer.
    fn next_candidate(&mut self, player: Player) -> Option<Position>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Tries each square once, in row-major order.
///
/// A square that was occupied when tried is not revisited.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveScan {
    next: usize,
}

impl ExhaustiveScan {
    /// Creates a scan starting at the top-left square.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovePolicy for ExhaustiveScan {
    fn next_candidate(&mut self, _player: Player) -> Option<Position> {
        let pos = Position::from_index(self.next)?;
        self.next += 1;
        Some(pos)
    }

    fn name(&self) -> &str {
        "sequential"
    }
}

/// Picks row and column uniformly at random, forever.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Creates a random policy.
    ///
    /// With a seed the sequence of candidates is reproducible; without one
    /// the generator is seeded from the operating system.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl MovePolicy for UniformRandom {
    fn next_candidate(&mut self, _player: Player) -> Option<Position> {
        let row = self.rng.random_range(0..3);
        let col = self.rng.random_range(0..3);
        match Position::from_coords(row, col) {
            Ok(pos) => Some(pos),
            Err(e) => {
                error!(error = %e, "Random policy produced an invalid square");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Replays a fixed list of squares, then stops.
#[derive(Debug, Clone)]
pub struct Scripted {
    moves: std::vec::IntoIter<Position>,
}

impl Scripted {
    /// Creates a policy that proposes `moves` in order.
    pub fn new(moves: impl Into<Vec<Position>>) -> Self {
        Self {
            moves: moves.into().into_iter(),
        }
    }
}

impl MovePolicy for Scripted {
    fn next_candidate(&mut self, _player: Player) -> Option<Position> {
        self.moves.next()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Policies selectable from configuration or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyKind {
    /// [`ExhaustiveScan`].
    Sequential,
    /// [`UniformRandom`].
    Random,
}

impl PolicyKind {
    /// Builds the policy. `seed` only affects [`PolicyKind::Random`].
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Sequential => Box::new(ExhaustiveScan::new()),
            PolicyKind::Random => Box::new(UniformRandom::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scan_yields_each_square_once_in_row_major_order() {
        let mut scan = ExhaustiveScan::new();
        let seen: Vec<_> = std::iter::from_fn(|| scan.next_candidate(Player::X)).collect();
        assert_eq!(seen, Position::ALL.to_vec());
        assert_eq!(scan.next_candidate(Player::X), None);
    }

    #[test]
    fn test_random_never_runs_out() {
        let mut policy = UniformRandom::new(Some(7));
        for _ in 0..500 {
            assert!(policy.next_candidate(Player::O).is_some());
        }
    }

    #[test]
    fn test_random_covers_every_square() {
        let mut policy = UniformRandom::new(Some(42));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.extend(policy.next_candidate(Player::O));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = UniformRandom::new(Some(99));
        let mut b = UniformRandom::new(Some(99));
        for _ in 0..50 {
            assert_eq!(a.next_candidate(Player::X), b.next_candidate(Player::X));
        }
    }

    #[test]
    fn test_scripted_replays_then_stops() {
        let mut policy = Scripted::new([Position::Center, Position::TopLeft]);
        assert_eq!(policy.next_candidate(Player::X), Some(Position::Center));
        assert_eq!(policy.next_candidate(Player::X), Some(Position::TopLeft));
        assert_eq!(policy.next_candidate(Player::X), None);
    }

    #[test]
    fn test_policy_kind_names() {
        assert_eq!(PolicyKind::Sequential.to_string(), "sequential");
        assert_eq!(PolicyKind::from_str("random").unwrap(), PolicyKind::Random);
        assert_eq!(PolicyKind::Random.build(Some(1)).name(), "random");
        assert_eq!(PolicyKind::Sequential.build(None).name(), "sequential");
    }
}
