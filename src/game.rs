//! A running match: display metadata and the turn counter wrapped around
//! the simulation state.

use crate::common::{Direction, GameError, Invariant};
use crate::config::NUM_SEATS;
use crate::state::State;
use crate::tiles::SEAT_COLORS;
use alloc::string::String;
use core::fmt::Write as _;

/// Per-seat display information, fixed at match creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroInfo {
    pub name: String,
    pub user_id: Option<String>,
    /// Absent for the server's practice bots.
    pub elo: Option<i32>,
    pub crashed: bool,
}

impl HeroInfo {
    /// Whether this seat is a ranked participant rather than a practice bot.
    pub fn is_real_bot(&self) -> bool {
        self.elo.is_some()
    }
}

/// A match in progress. `turn` counts individual hero-moves; the match ends
/// when it reaches `turn_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub hero_infos: [HeroInfo; NUM_SEATS],
    pub turn_max: i32,
    pub turn: i32,
    pub state: State,
}

impl Game {
    pub fn new(
        hero_infos: [HeroInfo; NUM_SEATS],
        turn_max: i32,
        turn: i32,
        state: State,
    ) -> Self {
        Self {
            hero_infos,
            turn_max,
            turn,
            state,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.turn >= self.turn_max
    }

    /// Apply one hero-move locally, keeping the turn counter and the
    /// state's seat cursor in lock-step.
    pub fn advance(&mut self, direction: Direction) -> Result<(), GameError> {
        self.state.advance(direction)?;
        self.turn += 1;
        self.check_turn_sync()
    }

    /// `next_hero_index == turn % 4` must hold at all times; a mismatch
    /// means resolution and turn-counting diverged.
    pub fn check_turn_sync(&self) -> Result<(), GameError> {
        if self.state.next_hero_index != (self.turn % NUM_SEATS as i32) as usize {
            return Err(Invariant::TurnDesync {
                turn: self.turn,
                next_hero_index: self.state.next_hero_index,
            }
            .into());
        }
        Ok(())
    }

    /// Multi-line console summary: turn header, seat roster, state status.
    pub fn render_status(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "turn {}/{}", self.turn, self.turn_max);
        if self.is_finished() {
            let _ = write!(out, " finished");
        }
        let _ = writeln!(out);

        let winner = self.state.winner();
        for (seat, info) in self.hero_infos.iter().enumerate() {
            let _ = write!(out, "{} ", if winner == Some(seat) { '*' } else { ' ' });
            let _ = write!(
                out,
                "@{} \x1b[{}m{}\x1b[0m",
                seat + 1,
                SEAT_COLORS[seat],
                info.name
            );
            if let Some(elo) = info.elo {
                let _ = write!(out, "({})", elo);
            }
            if info.crashed {
                let _ = write!(out, " (crashed)");
            }
            let _ = writeln!(out);
        }

        let _ = write!(out, "{}", self.state.render_status());
        out
    }
}
