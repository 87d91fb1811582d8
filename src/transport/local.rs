//! In-process stand-in for the server: the same engine plays authority.
//!
//! Snapshots are re-encoded through the wire DTOs on every exchange, so a
//! game over this transport exercises the full decode/validate path the
//! HTTP transport uses.

use crate::bot::{Bot, RandomBot};
use crate::common::{BoardDefect, Direction, GameError};
use crate::config::{FULL_LIFE, NUM_SEATS};
use crate::game::{Game, HeroInfo};
use crate::hashed::HashedTiles;
use crate::hero::Hero;
use crate::position::Position;
use crate::protocol::{BoardDto, GameDto, GameMessage, HeroDto};
use crate::state::State;
use crate::tiles::{Tile, Tiles};
use crate::transport::Transport;

/// Side length of the bundled map.
pub const DEFAULT_MAP_SIZE: usize = 10;

/// Bundled map for offline games: four corner spawns, eight mines, eight
/// taverns, mirrored walls.
pub const DEFAULT_MAP: &str = concat!(
    "@1  ##$-    $-##  @4",
    "        [][]        ",
    "    ##        ##    ",
    "$-                $-",
    "  []    ####    []  ",
    "  []    ####    []  ",
    "$-                $-",
    "    ##        ##    ",
    "        [][]        ",
    "@2  ##$-    $-##  @3",
);

/// Build a fresh match from a raw map: hero cells become spawn points, any
/// owned mines seed the matching hero's set, and the stripped grid becomes
/// the immutable background.
pub fn game_from_map(raw_tiles: &Tiles, turn_max: i32) -> Result<Game, GameError> {
    let mut spawns: [Option<Position>; NUM_SEATS] = [None; NUM_SEATS];
    for (position, tile) in raw_tiles.iter() {
        if let Tile::Hero(seat) = tile {
            spawns[seat] = Some(position);
        }
    }

    let owned_mines = raw_tiles.extract_owned_mines();
    let mut heroes: [Hero; NUM_SEATS] = core::array::from_fn(|_| Hero::default());
    for (seat, spawn) in spawns.iter().enumerate() {
        let spawn = spawn.ok_or(BoardDefect::MissingHero { seat })?;
        heroes[seat] = Hero::new(
            spawn,
            FULL_LIFE,
            0,
            owned_mines[seat].clone(),
            spawn,
            false,
        );
    }

    let infos: [HeroInfo; NUM_SEATS] = core::array::from_fn(|seat| HeroInfo {
        name: format!("bot-{}", seat + 1),
        user_id: None,
        elo: None,
        crashed: false,
    });

    let background = HashedTiles::new(raw_tiles.neutralize());
    let state = State::new(heroes, 0, background);
    Ok(Game::new(infos, turn_max, 0, state))
}

/// Owns an authoritative game and answers the client seat's moves, playing
/// the other three seats with random bots.
pub struct LocalTransport {
    game: Game,
    seat: usize,
    opponents: Vec<RandomBot>,
}

impl LocalTransport {
    /// Offline game on `raw_tiles` with `turns` moves per seat. The client
    /// controls seat 0.
    pub fn new(raw_tiles: &Tiles, turns: i32, seed: u64) -> Result<Self, GameError> {
        let game = game_from_map(raw_tiles, turns * NUM_SEATS as i32)?;
        let opponents = (1..NUM_SEATS as u64)
            .map(|offset| RandomBot::from_seed(seed.wrapping_add(offset)))
            .collect();
        Ok(Self {
            game,
            seat: 0,
            opponents,
        })
    }

    /// Offline game on the bundled map.
    pub fn on_default_map(turns: i32, seed: u64) -> Result<Self, GameError> {
        let tiles = Tiles::parse(DEFAULT_MAP_SIZE, DEFAULT_MAP)?;
        Self::new(&tiles, turns, seed)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn hero_dto(&self, seat: usize) -> HeroDto {
        let hero = &self.game.state.heroes[seat];
        let info = &self.game.hero_infos[seat];
        HeroDto {
            id: seat as i32 + 1,
            name: info.name.clone(),
            user_id: info.user_id.clone(),
            elo: info.elo,
            pos: hero.position.into(),
            spawn_pos: hero.spawn_position.into(),
            life: hero.life,
            gold: hero.gold,
            mine_count: hero.mine_positions.len(),
            crashed: hero.crashed,
        }
    }

    fn snapshot(&self) -> GameMessage {
        let full_tiles = self.game.state.full_tiles();
        GameMessage {
            game: GameDto {
                id: String::from("local"),
                turn: self.game.turn,
                max_turns: self.game.turn_max,
                heroes: (0..NUM_SEATS).map(|seat| self.hero_dto(seat)).collect(),
                board: BoardDto {
                    size: full_tiles.size(),
                    tiles: full_tiles.to_token_string(),
                },
                finished: self.game.is_finished(),
            },
            hero: self.hero_dto(self.seat),
            token: None,
            view_url: String::from("local://view"),
            play_url: String::from("local://play"),
        }
    }
}

#[async_trait::async_trait]
impl Transport for LocalTransport {
    async fn start(&mut self) -> anyhow::Result<GameMessage> {
        Ok(self.snapshot())
    }

    async fn play(&mut self, direction: Direction) -> anyhow::Result<GameMessage> {
        if self.game.is_finished() {
            anyhow::bail!("game is finished");
        }

        self.game
            .advance(direction)
            .map_err(|error| anyhow::anyhow!(error))?;

        // the other seats move before the client sees its next snapshot
        for opponent in &mut self.opponents {
            if self.game.is_finished() {
                break;
            }
            let reply = opponent.choose_direction(&self.game);
            self.game
                .advance(reply)
                .map_err(|error| anyhow::anyhow!(error))?;
        }

        Ok(self.snapshot())
    }
}
