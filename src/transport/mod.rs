//! Server connections: how games are entered and moves submitted.

use crate::common::Direction;
use crate::protocol::GameMessage;

/// A connection to a game authority. Implementations own any session state
/// (play URL, keys, the emulated game).
#[async_trait::async_trait]
pub trait Transport: Send {
    /// Enter a game and fetch the initial snapshot.
    async fn start(&mut self) -> anyhow::Result<GameMessage>;

    /// Submit a move and fetch the authoritative snapshot following it.
    async fn play(&mut self, direction: Direction) -> anyhow::Result<GameMessage>;
}

pub mod http;
pub mod local;
