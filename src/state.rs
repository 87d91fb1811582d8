//! The four heroes plus whose move comes next, and the one-step turn
//! resolution every planning rollout replays.

use crate::common::{Direction, GameError, Invariant};
use crate::config::{
    DRINK_COST, DRINK_LIFE, FIGHT_DAMAGE, FULL_LIFE, MINE_DAMAGE, NUM_SEATS,
};
use crate::hashed::{self, Hash, HashedTiles};
use crate::hero::Hero;
use crate::position::Position;
use crate::tiles::{Tile, Tiles, SEAT_COLORS};
use alloc::string::String;
use core::fmt;
use core::fmt::Write as _;

/// Dynamic game state layered over the immutable background grid. Cloning
/// copies only the hero records; the background is shared.
#[derive(Debug, Clone)]
pub struct State {
    pub heroes: [Hero; NUM_SEATS],
    /// Seat whose move the next resolution step applies. Stays in lock-step
    /// with the match turn counter: `next_hero_index == turn % 4`.
    pub next_hero_index: usize,
    background: HashedTiles,
}

impl State {
    pub fn new(heroes: [Hero; NUM_SEATS], next_hero_index: usize, background: HashedTiles) -> Self {
        Self {
            heroes,
            next_hero_index,
            background,
        }
    }

    pub fn background(&self) -> &HashedTiles {
        &self.background
    }

    /// Promote a background tile to its overlaid form: a hero standing on an
    /// empty cell, or a mine's current owner. The background never stores
    /// these transient markings itself.
    fn overlay(&self, tile: Tile, position: Position) -> Tile {
        match tile {
            Tile::Unknown | Tile::Wood | Tile::Tavern => tile,
            Tile::Mine(_) => {
                for (seat, hero) in self.heroes.iter().enumerate() {
                    if hero.mine_positions.contains(&position) {
                        return Tile::Mine(Some(seat));
                    }
                }
                Tile::Mine(None)
            }
            Tile::Empty => {
                for (seat, hero) in self.heroes.iter().enumerate() {
                    if hero.position == position {
                        return Tile::Hero(seat);
                    }
                }
                Tile::Empty
            }
            Tile::Hero(_) => Tile::Unknown,
        }
    }

    /// Overlaid lookup; the caller guarantees the position is in bounds.
    pub fn tile_at(&self, position: Position) -> Tile {
        self.overlay(self.background.tiles().tile_at(position), position)
    }

    /// Overlaid lookup reading anything outside the grid as `Unknown`.
    pub fn tile_at_checked(&self, position: Position) -> Tile {
        self.overlay(self.background.tiles().tile_at_checked(position), position)
    }

    /// The background with every hero position and owned mine overlaid.
    pub fn full_tiles(&self) -> Tiles {
        let mut tiles = self.background.tiles().clone();
        for (seat, hero) in self.heroes.iter().enumerate() {
            tiles.set_tile(hero.position, Tile::Hero(seat));
            for &mine in &hero.mine_positions {
                tiles.set_tile(mine, Tile::Mine(Some(seat)));
            }
        }
        tiles
    }

    /// Apply one hero-move: movement and local interaction, respawn check,
    /// fights in ascending seat order, thirst, mining income, turn tick.
    /// Mirrors the authoritative server resolution exactly.
    pub fn advance(&mut self, direction: Direction) -> Result<(), GameError> {
        let hero_index = self.next_hero_index;

        // movement and local interaction
        if direction != Direction::Stay {
            let target_position = self.heroes[hero_index].position.translated(direction);
            let target_tile = self.tile_at_checked(target_position);

            match target_tile {
                Tile::Unknown | Tile::Wood | Tile::Hero(_) => {}
                Tile::Empty => self.heroes[hero_index].position = target_position,
                Tile::Tavern => {
                    let hero = &mut self.heroes[hero_index];
                    if hero.gold >= DRINK_COST {
                        hero.gold -= DRINK_COST;
                        hero.life = (hero.life + DRINK_LIFE).min(FULL_LIFE);
                    }
                }
                Tile::Mine(owner) => {
                    if owner != Some(hero_index) {
                        self.heroes[hero_index].life -= MINE_DAMAGE;
                        if self.heroes[hero_index].life > 0 {
                            self.heroes[hero_index].mine_positions.insert(target_position);
                            if let Some(spoiled_index) = owner {
                                self.heroes[spoiled_index]
                                    .mine_positions
                                    .remove(&target_position);
                            }
                        }
                    }
                }
            }
        }

        // respawn if the move killed the mover
        if self.heroes[hero_index].life <= 0 {
            self.chain_respawn(hero_index, None, &mut [false; NUM_SEATS])?;
        }

        // fights: every hero adjacent to the mover takes damage, in seat
        // order. Cascades may relocate seats mid-loop, the mover included,
        // so positions and life are re-read each iteration rather than
        // snapshotted up front.
        for seat in 0..NUM_SEATS {
            if seat == hero_index {
                continue;
            }
            let mover_position = self.heroes[hero_index].position;
            if !self.heroes[seat].position.next_to(mover_position) {
                continue;
            }
            self.heroes[seat].life -= FIGHT_DAMAGE;
            if self.heroes[seat].life <= 0 {
                self.chain_respawn(seat, Some(hero_index), &mut [false; NUM_SEATS])?;
            }
        }

        // thirst: never below 1 on its own
        let hero = &mut self.heroes[hero_index];
        if hero.life > 1 {
            hero.life -= 1;
        }

        // mining income, counted after captures and cascades settled
        hero.gold += hero.mine_positions.len() as i32;

        self.next_hero_index = (self.next_hero_index + 1) % NUM_SEATS;

        self.check_positions_distinct()
    }

    /// Reset a dead hero to its spawn point, hand its mines to the killer,
    /// and kill whoever was standing on that spawn point in turn. The seen
    /// set caps the chain at one visit per seat; a revisit means the input
    /// state was corrupt.
    fn chain_respawn(
        &mut self,
        killed_index: usize,
        killer_index: Option<usize>,
        seen: &mut [bool; NUM_SEATS],
    ) -> Result<(), GameError> {
        if seen[killed_index] {
            return Err(Invariant::RespawnRevisit { seat: killed_index }.into());
        }
        seen[killed_index] = true;

        let spawn_position = self.heroes[killed_index].spawn_position;
        let crushed_index = match self.tile_at(spawn_position) {
            Tile::Hero(seat) => Some(seat),
            _ => None,
        };

        let lost_mines = core::mem::take(&mut self.heroes[killed_index].mine_positions);
        self.heroes[killed_index].position = spawn_position;
        self.heroes[killed_index].life = FULL_LIFE;
        if let Some(killer_index) = killer_index {
            self.heroes[killer_index].mine_positions.extend(lost_mines);
        }

        match crushed_index {
            // dead on its own spawn point: terminal
            Some(crushed_index) if crushed_index != killed_index => {
                self.chain_respawn(crushed_index, Some(killed_index), seen)
            }
            _ => Ok(()),
        }
    }

    fn check_positions_distinct(&self) -> Result<(), GameError> {
        for seat_aa in 0..NUM_SEATS {
            for seat_bb in seat_aa + 1..NUM_SEATS {
                if self.heroes[seat_aa].position == self.heroes[seat_bb].position {
                    return Err(Invariant::HeroOverlap {
                        seat_aa,
                        seat_bb,
                        position: self.heroes[seat_aa].position,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// The seat with strictly more gold than every other, if any.
    pub fn winner(&self) -> Option<usize> {
        let mut gold_seats: [(i32, usize); NUM_SEATS] =
            core::array::from_fn(|seat| (self.heroes[seat].gold, seat));
        gold_seats.sort_by(|aa, bb| bb.0.cmp(&aa.0));

        if gold_seats[0].0 == gold_seats[1].0 {
            return None;
        }
        Some(gold_seats[0].1)
    }

    /// Each seat's 0-based rank by descending gold. Ties receive distinct
    /// adjacent ranks, lower seat index first.
    pub fn ranks(&self) -> [usize; NUM_SEATS] {
        let mut gold_seats: [(i32, usize); NUM_SEATS] =
            core::array::from_fn(|seat| (self.heroes[seat].gold, seat));
        gold_seats.sort_by(|aa, bb| bb.0.cmp(&aa.0));

        let mut ranks = [0usize; NUM_SEATS];
        for (rank, &(_, seat)) in gold_seats.iter().enumerate() {
            ranks[seat] = rank;
        }
        ranks
    }

    pub fn hash_value(&self) -> Hash {
        let mut seed: Hash = 5_465_763;
        hashed::combine_range(&mut seed, self.heroes.iter().map(Hero::hash_value));
        hashed::combine(&mut seed, self.background.hash());
        hashed::combine(&mut seed, self.next_hero_index as Hash);
        seed
    }

    /// Multi-line console summary: hash, per-seat vitals, full board.
    pub fn render_status(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "hash {:x}", self.hash_value());

        let winner = self.winner();
        for (seat, hero) in self.heroes.iter().enumerate() {
            let _ = write!(out, "{}", if winner == Some(seat) { '*' } else { ' ' });
            let _ = write!(
                out,
                "{}",
                if seat == self.next_hero_index { '>' } else { ' ' }
            );
            let _ = writeln!(
                out,
                "@{} \x1b[{}m{}hp {}g {}m\x1b[0m",
                seat + 1,
                SEAT_COLORS[seat],
                hero.life,
                hero.gold,
                hero.mine_positions.len()
            );
        }

        let _ = write!(out, "{}", self.full_tiles());
        out
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.next_hero_index == other.next_hero_index
            && self.background == other.background
            && self.heroes == other.heroes
    }
}

impl Eq for State {}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<State @{} {:x}>",
            self.next_hero_index + 1,
            self.hash_value()
        )
    }
}
