//! Grid coordinates with the row/column translation convention.

use crate::common::Direction;
use crate::hashed::{self, Hash};
use alloc::collections::BTreeSet;
use core::fmt;

/// Row (`x`) and column (`y`) indices into the board. Ordering is
/// lexicographic on (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Ordered set of positions; iteration order is canonical, so hashing and
/// equality are independent of insertion order.
pub type PositionSet = BTreeSet<Position>;

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step along `direction`. North/South move across rows,
    /// East/West across columns.
    pub fn translated(self, direction: Direction) -> Position {
        match direction {
            Direction::Stay => self,
            Direction::North => Position::new(self.x - 1, self.y),
            Direction::South => Position::new(self.x + 1, self.y),
            Direction::East => Position::new(self.x, self.y + 1),
            Direction::West => Position::new(self.x, self.y - 1),
        }
    }

    /// Orthogonal adjacency. A cell is next to itself; diagonals are not
    /// adjacent.
    pub fn next_to(self, other: Position) -> bool {
        let delta_x = self.x - other.x;
        if delta_x > 1 || delta_x < -1 {
            return false;
        }
        let delta_y = self.y - other.y;
        if delta_y > 1 || delta_y < -1 {
            return false;
        }
        delta_x == 0 || delta_y == 0
    }

    pub fn hash_value(self) -> Hash {
        let mut seed: Hash = 42;
        hashed::combine(&mut seed, self.x as Hash);
        hashed::combine(&mut seed, self.y as Hash);
        seed
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(-1, -1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
