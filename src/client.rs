//! The turn loop driving a transport and a bot through a game.

use std::time::Instant;

use log::{debug, info};

use crate::bot::Bot;
use crate::config::NUM_SEATS;
use crate::game::Game;
use crate::protocol::GameMessage;
use crate::transport::Transport;

/// One finished game, from this client's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub seat: usize,
    pub winner: Option<usize>,
    pub rank: usize,
    pub gold: i32,
    pub turns_played: i32,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        self.winner == Some(self.seat)
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Win/draw/loss tally across a run of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome.is_draw() {
            self.draws += 1;
        } else {
            self.losses += 1;
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins / {} draws / {} losses",
            self.wins, self.draws, self.losses
        )
    }
}

/// Save the neutralized background under a name derived from its canonical
/// hash, so identical maps collapse to one file.
pub fn collect_map(game: &Game) -> anyhow::Result<String> {
    let background = game.state.background();
    let file_name = format!("map_{:x}.txt", background.hash());
    std::fs::write(&file_name, background.tiles().to_token_string())?;
    Ok(file_name)
}

fn seat_of(message: &GameMessage) -> anyhow::Result<usize> {
    let id = message.hero.id;
    if !(1..=NUM_SEATS as i32).contains(&id) {
        anyhow::bail!("our hero id {} is out of range", id);
    }
    Ok((id - 1) as usize)
}

/// Play one game to completion: fetch the initial snapshot, then loop
/// choosing a move and replacing local state with the authoritative reply.
pub async fn play_game<T, B>(
    transport: &mut T,
    bot: &mut B,
    save_maps: bool,
    render: bool,
) -> anyhow::Result<Outcome>
where
    T: Transport + ?Sized,
    B: Bot + ?Sized,
{
    let message = transport.start().await?;
    info!("view game at {}", message.view_url);

    let mut game = Game::from_message(&message).map_err(|error| anyhow::anyhow!(error))?;
    let seat = seat_of(&message)?;

    if save_maps {
        let file_name = collect_map(&game)?;
        info!("saved {}", file_name);
    }

    while !game.is_finished() {
        if render {
            println!("{}", game.render_status());
        }

        let direction = bot.choose_direction(&game);
        debug!("seat {} plays {}", seat + 1, direction);
        bot.observe_move(&game, direction);

        let request_start = Instant::now();
        let reply = transport.play(direction).await?;
        debug!(
            "request took {:.3}s",
            request_start.elapsed().as_secs_f64()
        );

        // the authoritative snapshot replaces any local prediction
        game.sync_with(&reply).map_err(|error| anyhow::anyhow!(error))?;
    }

    if render {
        println!("{}", game.render_status());
    }
    info!("view finished game at {}", message.view_url);

    let ranks = game.state.ranks();
    Ok(Outcome {
        seat,
        winner: game.state.winner(),
        rank: ranks[seat],
        gold: game.state.heroes[seat].gold,
        turns_played: game.turn,
    })
}
