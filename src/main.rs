#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::{error, info};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use vindinium::{
    init_logging, play_game, transport::http::Mode, HttpTransport, LocalTransport, RandomBot,
    Tally, Transport,
};

#[derive(Parser)]
#[command(author, version, about = "Client for a four-hero mining arena", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play ranked games against other bots.
    Arena {
        #[arg(long, help = "API key identifying this bot")]
        key: String,
        #[arg(long, default_value = "http://vindinium.org")]
        server: String,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible moves (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Save each new map keyed by its board hash")]
        collect_maps: bool,
        #[arg(long, help = "Skip per-turn board rendering")]
        quiet: bool,
    },
    /// Play private training games against the server's practice bots.
    Training {
        #[arg(long, help = "API key identifying this bot")]
        key: String,
        #[arg(long, default_value = "http://vindinium.org")]
        server: String,
        #[arg(long, default_value_t = 300)]
        turns: i32,
        #[arg(long, help = "Named map to request (e.g., m1..m6)")]
        map: Option<String>,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible moves (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Save each new map keyed by its board hash")]
        collect_maps: bool,
        #[arg(long, help = "Skip per-turn board rendering")]
        quiet: bool,
    },
    /// Run an offline game on the bundled map with four random bots.
    Local {
        #[arg(long, default_value_t = 100, help = "Turns per seat")]
        turns: i32,
        #[arg(long, help = "Fix RNG seed for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, help = "Skip per-turn board rendering")]
        quiet: bool,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
async fn run_games<T: Transport>(
    mut transport: T,
    seed: Option<u64>,
    games: u32,
    collect_maps: bool,
    render: bool,
) -> anyhow::Result<()> {
    let mut bot = RandomBot::new(seeded_rng(seed));
    let mut tally = Tally::default();

    for game_number in 1..=games {
        info!("starting game {}/{}", game_number, games);
        match play_game(&mut transport, &mut bot, collect_maps, render).await {
            Ok(outcome) => {
                tally.record(&outcome);
                info!(
                    "game {} done: rank {} with {} gold after {} turns",
                    game_number,
                    outcome.rank + 1,
                    outcome.gold,
                    outcome.turns_played
                );
            }
            Err(err) => {
                error!("game {} aborted: {:#}", game_number, err);
            }
        }
        println!("{}", tally);
    }
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Arena {
            key,
            server,
            games,
            seed,
            collect_maps,
            quiet,
        } => {
            let transport = HttpTransport::new(server, key, Mode::Arena)?;
            run_games(transport, seed, games, collect_maps, !quiet).await?;
        }
        Commands::Training {
            key,
            server,
            turns,
            map,
            games,
            seed,
            collect_maps,
            quiet,
        } => {
            let transport = HttpTransport::new(server, key, Mode::Training { turns, map })?;
            run_games(transport, seed, games, collect_maps, !quiet).await?;
        }
        Commands::Local { turns, seed, quiet } => {
            let seed = seed.unwrap_or(0);
            let transport =
                LocalTransport::on_default_map(turns, seed).map_err(|e| anyhow::anyhow!(e))?;
            run_games(transport, Some(seed), 1, false, !quiet).await?;
        }
    }
    Ok(())
}
