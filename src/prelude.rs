//! Commonly used types and utilities for ease of import.

pub use crate::{
    Bot, Direction, Game, GameError, Hero, HeroInfo, Position, RandomBot, State, Tile, Tiles,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, play_game, Outcome, Tally};

#[cfg(feature = "std")]
pub use crate::transport::{http::HttpTransport, local::LocalTransport, Transport};
