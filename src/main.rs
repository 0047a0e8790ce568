use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{cli, init_logging, AutomatedActor, HumanActor, Match, Side};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn rng_for(seed: Option<u64>, stream: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, human_at_keyboard) = match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => (seed, true),
        Commands::Auto { seed } => (seed, false),
    };
    if let Some(s) = seed {
        println!("Using fixed seed: {} (layouts will be reproducible)", s);
    }

    let mut layout_rng = rng_for(seed, 0);
    let opponent = Box::new(AutomatedActor::new(rng_for(seed, 1)));
    let mut game = if human_at_keyboard {
        Match::generate(&mut layout_rng, Box::new(HumanActor::stdio()), opponent)
    } else {
        Match::generate(
            &mut layout_rng,
            Box::new(AutomatedActor::new(rng_for(seed, 2))),
            opponent,
        )
    }
    .map_err(|e| anyhow::anyhow!(e))?;

    let mut stdout = std::io::stdout();
    cli::greet(&mut stdout)?;
    let mut observer = cli::ConsoleObserver::new(stdout);
    let winner = game.run(&mut observer)?;
    if human_at_keyboard && winner == Side::Human {
        println!("Sunk the whole fleet in {} shots.", game.shots());
    }
    Ok(())
}
