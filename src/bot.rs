//! Move selection. A bot consumes a read-only view of the game and returns
//! a direction; anything beyond uniform random belongs to the caller.

use crate::common::Direction;
use crate::game::Game;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Interface implemented by decision-making components.
pub trait Bot {
    /// Pick the next move for the seat this client controls.
    fn choose_direction(&mut self, game: &Game) -> Direction;

    /// Observe the move actually submitted, for bots that carry state
    /// between turns.
    fn observe_move(&mut self, _game: &Game, _direction: Direction) {}
}

/// Reference bot: uniform over all five directions.
pub struct RandomBot {
    rng: SmallRng,
}

impl RandomBot {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn choose_direction(&mut self, _game: &Game) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}
