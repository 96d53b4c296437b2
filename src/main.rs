#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_battle::{
    init_logging, AiPlayer, Board, FleetConfig, GameEngine, GameSummary, Player, RandomPlayer,
    Side, BOARD_HEIGHT, BOARD_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Random,
    Automatic,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a single computer-vs-computer game and print the summary as JSON.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlayerType::Automatic)]
        first: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Random)]
        second: PlayerType,
        #[arg(long, default_value_t = BOARD_WIDTH, value_parser = parse_side, help = BOARD_SIDE_HELP)]
        width: usize,
        #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = parse_side, help = BOARD_SIDE_HELP)]
        height: usize,
    },
    /// Run many independent games and report how often each side wins.
    Simulate {
        #[arg(long, default_value_t = 1000)]
        games: u64,
        #[arg(long, help = "Base seed; game i uses seed + i")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlayerType::Automatic)]
        first: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Random)]
        second: PlayerType,
        #[arg(long, default_value_t = BOARD_WIDTH, value_parser = parse_side, help = BOARD_SIDE_HELP)]
        width: usize,
        #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = parse_side, help = BOARD_SIDE_HELP)]
        height: usize,
    },
}

#[cfg(feature = "std")]
const BOARD_SIDE_HELP: &str =
    "Board side in cells; at least 10, smaller boards cannot always fit the default fleet";

/// Boards below the default size may never fit the default fleet, which
/// would make fleet generation spin forever.
#[cfg(feature = "std")]
fn parse_side(value: &str) -> Result<usize, String> {
    let side: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a board size", value))?;
    let min = BOARD_WIDTH.min(BOARD_HEIGHT);
    if side < min {
        return Err(format!("board sides must be at least {} cells", min));
    }
    Ok(side)
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType, config: &FleetConfig) -> Box<dyn Player> {
    match kind {
        PlayerType::Random => Box::new(RandomPlayer::new(config.width, config.height)),
        PlayerType::Automatic => Box::new(AiPlayer::new(config.width, config.height)),
    }
}

/// Play one game with fresh boards and players, all driven by `seed`.
#[cfg(feature = "std")]
fn play_game(
    seed: u64,
    first: PlayerType,
    second: PlayerType,
    config: &FleetConfig,
) -> anyhow::Result<GameSummary> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let board1 = Board::random(&mut rng, config)?;
    let board2 = Board::random(&mut rng, config)?;
    let mut engine = GameEngine::new(
        Side::new("player1", board1, make_player(first, config)),
        Side::new("player2", board2, make_player(second, config)),
    );
    Ok(engine.run(&mut rng)?)
}

#[cfg(feature = "std")]
fn fleet_config(width: usize, height: usize) -> FleetConfig {
    FleetConfig {
        width,
        height,
        ..FleetConfig::default()
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let base_seed = |seed: Option<u64>| seed.unwrap_or_else(|| rand::rng().random());

    match cli.command {
        Commands::Play {
            seed,
            first,
            second,
            width,
            height,
        } => {
            let seed = base_seed(seed);
            info!("playing {:?} vs {:?} with seed {}", first, second, seed);
            let summary = play_game(seed, first, second, &fleet_config(width, height))?;
            let result = json!({
                "seed": seed,
                "summary": summary,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Simulate {
            games,
            seed,
            first,
            second,
            width,
            height,
        } => {
            let seed = base_seed(seed);
            let config = fleet_config(width, height);
            info!("simulating {} games of {:?} vs {:?}", games, first, second);
            let mut wins = [0u64; 2];
            let mut winning_attacks = 0u64;
            for i in 0..games {
                let summary = play_game(seed.wrapping_add(i), first, second, &config)?;
                wins[summary.winner] += 1;
                winning_attacks += summary.attacks[summary.winner] as u64;
            }
            let per_game = |n: u64| if games == 0 { 0.0 } else { n as f64 / games as f64 };
            let win_rate = per_game(wins[0]) * 100.0;
            let average_attacks = per_game(winning_attacks);
            let result = json!({
                "seed": seed,
                "games": games,
                "wins": {"player1": wins[0], "player2": wins[1]},
                "player1_win_rate": win_rate,
                "average_winning_attacks": average_attacks,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
