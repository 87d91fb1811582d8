//! Wire snapshot decoding and the cross-checks applied at ingestion.
//!
//! The server's JSON is decoded into these DTOs, then validated against the
//! board before any of it reaches the simulation state: hero ids must match
//! seats, reported mine counts must agree with the mines actually owned on
//! the board, and the turn counter must stay consistent. A snapshot failing
//! any check is surfaced as `MalformedSnapshot` rather than guessed at.

use crate::common::{GameError, SnapshotDefect};
use crate::config::NUM_SEATS;
use crate::game::{Game, HeroInfo};
use crate::hashed::HashedTiles;
use crate::hero::Hero;
use crate::position::{Position, PositionSet};
use crate::state::State;
use crate::tiles::Tiles;
use serde::{Deserialize, Serialize};

/// Envelope returned by the server for both the initial fetch and every
/// subsequent move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMessage {
    pub game: GameDto,
    /// The hero this client controls.
    pub hero: HeroDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub view_url: String,
    pub play_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub turn: i32,
    pub max_turns: i32,
    pub heroes: Vec<HeroDto>,
    pub board: BoardDto,
    pub finished: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    /// 1-based; must equal seat index + 1.
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elo: Option<i32>,
    pub pos: PositionDto,
    pub spawn_pos: PositionDto,
    pub life: i32,
    pub gold: i32,
    pub mine_count: usize,
    #[serde(default)]
    pub crashed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDto {
    pub size: usize,
    pub tiles: String,
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        Position::new(dto.x, dto.y)
    }
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        PositionDto {
            x: position.x,
            y: position.y,
        }
    }
}

impl GameDto {
    /// Decode the raw board, transient markings included.
    pub fn parse_tiles(&self) -> Result<Tiles, GameError> {
        Tiles::parse(self.board.size, &self.board.tiles)
    }

    /// Cross-check the hero list against the mines owned on `tiles` and
    /// hand back each seat's mine set.
    fn validated_owned_mines(&self, tiles: &Tiles) -> Result<[PositionSet; NUM_SEATS], GameError> {
        if self.heroes.len() != NUM_SEATS {
            return Err(SnapshotDefect::HeroCount {
                count: self.heroes.len(),
            }
            .into());
        }

        let owned_mines = tiles.extract_owned_mines();
        for (seat, dto) in self.heroes.iter().enumerate() {
            if dto.id != seat as i32 + 1 {
                return Err(SnapshotDefect::SeatId { seat, id: dto.id }.into());
            }
            if dto.mine_count != owned_mines[seat].len() {
                return Err(SnapshotDefect::MineCount {
                    seat,
                    reported: dto.mine_count,
                    derived: owned_mines[seat].len(),
                }
                .into());
            }
        }
        Ok(owned_mines)
    }
}

fn hero_from_dto(dto: &HeroDto, mine_positions: PositionSet) -> Hero {
    Hero::new(
        dto.pos.into(),
        dto.life,
        dto.gold,
        mine_positions,
        dto.spawn_pos.into(),
        dto.crashed,
    )
}

fn hero_info_from_dto(dto: &HeroDto) -> HeroInfo {
    HeroInfo {
        name: dto.name.clone(),
        user_id: dto.user_id.clone(),
        elo: dto.elo,
        crashed: dto.crashed,
    }
}

impl Game {
    /// Build a match from the initial server snapshot. The raw board seeds
    /// both the immutable background and each hero's starting mine set.
    pub fn from_message(message: &GameMessage) -> Result<Game, GameError> {
        let game_dto = &message.game;
        let raw_tiles = game_dto.parse_tiles()?;
        let owned_mines = game_dto.validated_owned_mines(&raw_tiles)?;

        let mut heroes: [Hero; NUM_SEATS] = core::array::from_fn(|_| Hero::default());
        let mut infos: [HeroInfo; NUM_SEATS] = core::array::from_fn(|_| HeroInfo {
            name: String::from("unknown"),
            user_id: None,
            elo: None,
            crashed: false,
        });
        for (seat, dto) in game_dto.heroes.iter().enumerate() {
            heroes[seat] = hero_from_dto(dto, owned_mines[seat].clone());
            infos[seat] = hero_info_from_dto(dto);
        }

        let background = HashedTiles::new(raw_tiles.neutralize());
        let next_hero_index = (game_dto.turn % NUM_SEATS as i32) as usize;
        let state = State::new(heroes, next_hero_index, background);

        let game = Game::new(infos, game_dto.max_turns, game_dto.turn, state);
        game.check_turn_sync()?;
        Ok(game)
    }

    /// Replace hero data and the turn counter wholesale from an
    /// authoritative snapshot. Spawn points and the background are fixed at
    /// match start; a snapshot disagreeing with either is malformed.
    pub fn sync_with(&mut self, message: &GameMessage) -> Result<(), GameError> {
        let game_dto = &message.game;
        if game_dto.max_turns != self.turn_max {
            return Err(SnapshotDefect::TurnMaxChanged {
                expected: self.turn_max,
                actual: game_dto.max_turns,
            }
            .into());
        }
        if game_dto.turn < self.turn {
            return Err(SnapshotDefect::TurnRegressed {
                previous: self.turn,
                reported: game_dto.turn,
            }
            .into());
        }

        let raw_tiles = game_dto.parse_tiles()?;
        if raw_tiles.neutralize() != *self.state.background().tiles() {
            return Err(SnapshotDefect::BoardChanged.into());
        }
        let owned_mines = game_dto.validated_owned_mines(&raw_tiles)?;

        for (seat, dto) in game_dto.heroes.iter().enumerate() {
            let hero = &mut self.state.heroes[seat];
            hero.position = dto.pos.into();
            hero.life = dto.life;
            hero.gold = dto.gold;
            hero.crashed = dto.crashed;
            hero.mine_positions = owned_mines[seat].clone();
            self.hero_infos[seat].crashed = dto.crashed;
        }

        self.turn = game_dto.turn;
        self.state.next_hero_index = (game_dto.turn % NUM_SEATS as i32) as usize;
        self.check_turn_sync()
    }
}
