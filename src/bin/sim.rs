use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AutomatedActor, Match, Side};
use serde::Serialize;

/// Outcome of one automated match.
#[derive(Serialize)]
struct Summary {
    winner: Side,
    shots: usize,
    human_ships_lost: usize,
    automated_ships_lost: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut layout_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let p1 = AutomatedActor::new(SmallRng::seed_from_u64(seed1));
    let p2 = AutomatedActor::new(SmallRng::seed_from_u64(seed2));

    let mut game = Match::generate(&mut layout_rng, Box::new(p1), Box::new(p2))
        .map_err(|e| anyhow::anyhow!(e))?;
    let winner = game.run(&mut ())?;

    let summary = Summary {
        winner,
        shots: game.shots(),
        human_ships_lost: game.board(Side::Human).destroyed_count(),
        automated_ships_lost: game.board(Side::Automated).destroyed_count(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
