//! Order-combining 64-bit hashing used for canonical state identity.

use crate::tiles::Tiles;
use alloc::sync::Arc;

/// Canonical hash value. Two states with identical semantic content hash
/// identically regardless of container insertion order.
pub type Hash = u64;

const GOLDEN_GAMMA: Hash = 0x9e37_79b9_7f4a_7c15;

/// Fold `value` into `seed`.
pub fn combine(seed: &mut Hash, value: Hash) {
    *seed ^= value
        .wrapping_add(GOLDEN_GAMMA)
        .wrapping_add(seed.wrapping_shl(6))
        .wrapping_add(*seed >> 2);
}

/// Fold an ordered range of hashes into `seed`.
pub fn combine_range<I>(seed: &mut Hash, values: I)
where
    I: IntoIterator<Item = Hash>,
{
    for value in values {
        combine(seed, value);
    }
}

/// The immutable background grid paired with its precomputed hash. Shared
/// between clones of a state so rollouts copy only the hero records.
#[derive(Debug, Clone)]
pub struct HashedTiles {
    hash: Hash,
    tiles: Arc<Tiles>,
}

impl HashedTiles {
    pub fn new(tiles: Tiles) -> Self {
        Self {
            hash: tiles.hash_value(),
            tiles: Arc::new(tiles),
        }
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }
}

impl PartialEq for HashedTiles {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && *self.tiles == *other.tiles
    }
}

impl Eq for HashedTiles {}
