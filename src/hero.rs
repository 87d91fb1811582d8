//! Per-seat mutable hero record.

use crate::hashed::{self, Hash};
use crate::position::{Position, PositionSet};

/// One hero's dynamic fields. The spawn point is fixed at match start;
/// everything else is rewritten by resolution steps or authoritative
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub position: Position,
    pub life: i32,
    pub gold: i32,
    pub mine_positions: PositionSet,
    pub spawn_position: Position,
    /// Set when the remote bot for this seat failed or disconnected.
    pub crashed: bool,
}

impl Hero {
    pub fn new(
        position: Position,
        life: i32,
        gold: i32,
        mine_positions: PositionSet,
        spawn_position: Position,
        crashed: bool,
    ) -> Self {
        Self {
            position,
            life,
            gold,
            mine_positions,
            spawn_position,
            crashed,
        }
    }

    pub fn hash_value(&self) -> Hash {
        let mut seed: Hash = 4_546_139;
        hashed::combine(&mut seed, self.position.hash_value());
        hashed::combine(&mut seed, self.life as Hash);
        hashed::combine(&mut seed, self.gold as Hash);
        hashed::combine(&mut seed, self.crashed as Hash);
        hashed::combine(&mut seed, self.spawn_position.hash_value());
        hashed::combine_range(
            &mut seed,
            self.mine_positions.iter().map(|mine| mine.hash_value()),
        );
        seed
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            position: Position::default(),
            life: -1,
            gold: -1,
            mine_positions: PositionSet::new(),
            spawn_position: Position::default(),
            crashed: true,
        }
    }
}
