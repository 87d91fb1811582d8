//! The board grid: token codec, background neutralization and lookups.

use crate::common::{BoardDefect, GameError};
use crate::config::NUM_SEATS;
use crate::hashed::{self, Hash};
use crate::position::{Position, PositionSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// ANSI color codes for the four seats, in seat order.
pub(crate) const SEAT_COLORS: [u8; NUM_SEATS] = [31, 34, 32, 33];

/// One cell of the board. Hero and mine-owner markings are transient
/// overlays derived from hero state; a background grid keeps only the
/// owner-agnostic base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Unknown,
    Empty,
    Wood,
    /// A hero is standing here; seat index 0..=3.
    Hero(usize),
    Tavern,
    /// A gold mine, with its owning seat if captured.
    Mine(Option<usize>),
}

impl Tile {
    /// Decode a canonical two-character token.
    pub fn from_token(token: &[u8]) -> Option<Tile> {
        match token {
            b"??" => Some(Tile::Unknown),
            b"  " => Some(Tile::Empty),
            b"##" => Some(Tile::Wood),
            b"[]" => Some(Tile::Tavern),
            b"$-" => Some(Tile::Mine(None)),
            [b'@', seat @ b'1'..=b'4'] => Some(Tile::Hero((seat - b'1') as usize)),
            [b'$', seat @ b'1'..=b'4'] => Some(Tile::Mine(Some((seat - b'1') as usize))),
            _ => None,
        }
    }

    /// Canonical two-character token.
    pub fn token(self) -> [u8; 2] {
        match self {
            Tile::Unknown => *b"??",
            Tile::Empty => *b"  ",
            Tile::Wood => *b"##",
            Tile::Tavern => *b"[]",
            Tile::Mine(None) => *b"$-",
            Tile::Hero(seat) => [b'@', b'1' + seat as u8],
            Tile::Mine(Some(seat)) => [b'$', b'1' + seat as u8],
        }
    }

    fn ordinal(self) -> Hash {
        match self {
            Tile::Unknown => 0,
            Tile::Empty => 1,
            Tile::Wood => 2,
            Tile::Hero(seat) => 3 + seat as Hash,
            Tile::Tavern => 7,
            Tile::Mine(None) => 8,
            Tile::Mine(Some(seat)) => 9 + seat as Hash,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Unknown => write!(f, "\x1b[37m··\x1b[0m"),
            Tile::Empty => write!(f, "  "),
            Tile::Wood => write!(f, "##"),
            Tile::Tavern => write!(f, "[]"),
            Tile::Mine(None) => write!(f, "$-"),
            Tile::Hero(seat) => {
                write!(f, "\x1b[{}m@{}\x1b[0m", SEAT_COLORS[*seat], seat + 1)
            }
            Tile::Mine(Some(seat)) => write!(f, "${}", seat + 1),
        }
    }
}

/// Square grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiles {
    size: usize,
    cells: Vec<Tile>,
}

impl Tiles {
    /// Decode a fixed-length token stream into a size×size grid. Any
    /// unrecognized token fails with `MalformedBoard`.
    pub fn parse(size: usize, text: &str) -> Result<Tiles, GameError> {
        Self::decode(size, text, true)
    }

    /// Compatibility decoding path: unrecognized tokens become `Unknown`
    /// instead of failing. A wrong stream length still fails.
    pub fn parse_lossy(size: usize, text: &str) -> Result<Tiles, GameError> {
        Self::decode(size, text, false)
    }

    fn decode(size: usize, text: &str, strict: bool) -> Result<Tiles, GameError> {
        let bytes = text.as_bytes();
        let expected = size * size * 2;
        if bytes.len() != expected {
            return Err(BoardDefect::WrongLength {
                expected,
                actual: bytes.len(),
            }
            .into());
        }

        let mut cells = Vec::with_capacity(size * size);
        for (index, token) in bytes.chunks_exact(2).enumerate() {
            match Tile::from_token(token) {
                Some(tile) => cells.push(tile),
                None if strict => {
                    return Err(BoardDefect::UnknownToken {
                        index,
                        token: String::from_utf8_lossy(token).into_owned(),
                    }
                    .into());
                }
                None => cells.push(Tile::Unknown),
            }
        }

        Ok(Tiles { size, cells })
    }

    /// Build a grid from pre-decoded cells. Panics if `cells` is not
    /// `size * size` long; internal callers construct well-formed grids.
    pub fn from_cells(size: usize, cells: Vec<Tile>) -> Tiles {
        assert_eq!(cells.len(), size * size);
        Tiles { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Unchecked lookup; the caller guarantees the position is in bounds.
    pub fn tile_at(&self, position: Position) -> Tile {
        self.cells[position.x as usize * self.size + position.y as usize]
    }

    /// Bounds-checked lookup; anything outside the grid reads as `Unknown`,
    /// so board edges behave like wall cells.
    pub fn tile_at_checked(&self, position: Position) -> Tile {
        if position.x < 0 || position.y < 0 {
            return Tile::Unknown;
        }
        if position.x as usize >= self.size || position.y as usize >= self.size {
            return Tile::Unknown;
        }
        self.tile_at(position)
    }

    pub(crate) fn set_tile(&mut self, position: Position, tile: Tile) {
        self.cells[position.x as usize * self.size + position.y as usize] = tile;
    }

    /// Iterate cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells.iter().enumerate().map(move |(index, &tile)| {
            (
                Position::new((index / self.size) as i32, (index % self.size) as i32),
                tile,
            )
        })
    }

    /// A copy with every transient marking stripped: heroes become empty
    /// cells, owned mines become the unowned mine marker. Idempotent.
    pub fn neutralize(&self) -> Tiles {
        let cells = self
            .cells
            .iter()
            .map(|&tile| match tile {
                Tile::Hero(_) => Tile::Empty,
                Tile::Mine(Some(_)) => Tile::Mine(None),
                other => other,
            })
            .collect();
        Tiles {
            size: self.size,
            cells,
        }
    }

    /// The set of mine positions each seat currently owns on this grid.
    pub fn extract_owned_mines(&self) -> [PositionSet; NUM_SEATS] {
        let mut owned: [PositionSet; NUM_SEATS] = Default::default();
        for (position, tile) in self.iter() {
            if let Tile::Mine(Some(seat)) = tile {
                owned[seat].insert(position);
            }
        }
        owned
    }

    /// Re-encode the grid as the canonical token stream; inverse of `parse`.
    pub fn to_token_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for &tile in &self.cells {
            let token = tile.token();
            out.push(token[0] as char);
            out.push(token[1] as char);
        }
        out
    }

    pub fn hash_value(&self) -> Hash {
        let mut seed: Hash = 0;
        hashed::combine_range(&mut seed, self.cells.iter().map(|tile| tile.ordinal()));
        hashed::combine(&mut seed, 2);
        hashed::combine(&mut seed, self.size as Hash);
        hashed::combine(&mut seed, self.size as Hash);
        seed
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "╔")?;
        for _ in 0..self.size {
            write!(f, "══")?;
        }
        writeln!(f, "╗")?;

        for row in 0..self.size {
            write!(f, "║")?;
            for col in 0..self.size {
                write!(f, "{}", self.cells[row * self.size + col])?;
            }
            writeln!(f, "║")?;
        }

        write!(f, "╚")?;
        for _ in 0..self.size {
            write!(f, "══")?;
        }
        writeln!(f, "╝")
    }
}
