#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use vindinium::{play_game, LocalTransport, RandomBot};

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <turns>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let turns: i32 = args[2].parse()?;

    let mut transport =
        LocalTransport::on_default_map(turns, seed).map_err(|e| anyhow::anyhow!(e))?;
    let mut bot = RandomBot::from_seed(seed);

    let outcome = play_game(&mut transport, &mut bot, false, false).await?;

    let result = json!({
        "seat": outcome.seat + 1,
        "winner": outcome.winner.map(|seat| seat + 1),
        "rank": outcome.rank + 1,
        "gold": outcome.gold,
        "turns": outcome.turns_played,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
