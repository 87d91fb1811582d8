//! Shared vocabulary: move directions and the client's error taxonomy.

use crate::position::Position;
use alloc::string::String;
use core::fmt;

/// A single hero move, as exchanged with bots and serialized to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Stay,
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the server's encoding order.
    pub const ALL: [Direction; 5] = [
        Direction::Stay,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Wire name understood by the server's `dir` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Stay => "Stay",
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defects in a serialized board token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardDefect {
    /// Token at `index` is not in the canonical set.
    UnknownToken { index: usize, token: String },
    /// Stream length in bytes is not two per cell.
    WrongLength { expected: usize, actual: usize },
    /// The map carries no starting cell for `seat`.
    MissingHero { seat: usize },
}

/// Snapshot fields that failed a structural cross-check at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotDefect {
    /// The server reported other than four heroes.
    HeroCount { count: usize },
    /// A hero's 1-based id does not match its seat.
    SeatId { seat: usize, id: i32 },
    /// Reported mine count disagrees with the mines owned on the board.
    MineCount {
        seat: usize,
        reported: usize,
        derived: usize,
    },
    /// The turn limit changed mid-match.
    TurnMaxChanged { expected: i32, actual: i32 },
    /// The authoritative turn counter went backwards.
    TurnRegressed { previous: i32, reported: i32 },
    /// The neutralized board no longer matches the match background.
    BoardChanged,
}

/// Internal inconsistencies detected during turn resolution. Always fatal to
/// the current simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// A respawn cascade reached a seat it had already resolved.
    RespawnRevisit { seat: usize },
    /// Two heroes ended a resolution step on the same cell.
    HeroOverlap {
        seat_aa: usize,
        seat_bb: usize,
        position: Position,
    },
    /// `next_hero_index` fell out of lock-step with the turn counter.
    TurnDesync { turn: i32, next_hero_index: usize },
}

/// Errors surfaced by the simulation core and snapshot ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    MalformedBoard(BoardDefect),
    MalformedSnapshot(SnapshotDefect),
    InvariantViolation(Invariant),
}

impl From<BoardDefect> for GameError {
    fn from(defect: BoardDefect) -> Self {
        GameError::MalformedBoard(defect)
    }
}

impl From<SnapshotDefect> for GameError {
    fn from(defect: SnapshotDefect) -> Self {
        GameError::MalformedSnapshot(defect)
    }
}

impl From<Invariant> for GameError {
    fn from(invariant: Invariant) -> Self {
        GameError::InvariantViolation(invariant)
    }
}

impl fmt::Display for BoardDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardDefect::UnknownToken { index, token } => {
                write!(f, "unknown tile token {:?} at cell {}", token, index)
            }
            BoardDefect::WrongLength { expected, actual } => {
                write!(
                    f,
                    "board stream is {} bytes, expected {}",
                    actual, expected
                )
            }
            BoardDefect::MissingHero { seat } => {
                write!(f, "map has no starting cell for hero {}", seat + 1)
            }
        }
    }
}

impl fmt::Display for SnapshotDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotDefect::HeroCount { count } => {
                write!(f, "snapshot carries {} heroes, expected 4", count)
            }
            SnapshotDefect::SeatId { seat, id } => {
                write!(f, "hero at seat {} reports id {}", seat, id)
            }
            SnapshotDefect::MineCount {
                seat,
                reported,
                derived,
            } => write!(
                f,
                "hero {} reports {} mines but owns {} on the board",
                seat + 1,
                reported,
                derived
            ),
            SnapshotDefect::TurnMaxChanged { expected, actual } => {
                write!(f, "turn limit changed from {} to {}", expected, actual)
            }
            SnapshotDefect::TurnRegressed { previous, reported } => {
                write!(f, "turn counter went back from {} to {}", previous, reported)
            }
            SnapshotDefect::BoardChanged => {
                write!(f, "board background differs from match start")
            }
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::RespawnRevisit { seat } => {
                write!(f, "respawn cascade revisited seat {}", seat)
            }
            Invariant::HeroOverlap {
                seat_aa,
                seat_bb,
                position,
            } => write!(
                f,
                "heroes {} and {} both occupy {}",
                seat_aa + 1,
                seat_bb + 1,
                position
            ),
            Invariant::TurnDesync {
                turn,
                next_hero_index,
            } => write!(
                f,
                "next hero index {} does not match turn {}",
                next_hero_index, turn
            ),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MalformedBoard(defect) => write!(f, "malformed board: {}", defect),
            GameError::MalformedSnapshot(defect) => write!(f, "malformed snapshot: {}", defect),
            GameError::InvariantViolation(invariant) => {
                write!(f, "invariant violation: {}", invariant)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
