mod commands;
mod config;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use common::games::tictactoe::{Difficulty, Mark};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "ticky", about = "Tic-tac-toe against Ticky")]
struct Args {
    /// Config file, defaults to ticky_config.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Log every bot decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask Ticky for its move on a board such as "XX_/_O_/___"
    Suggest {
        board: String,
        #[arg(long)]
        bot: Option<Mark>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_delay: bool,
    },
    /// Play bot against bot and report the results
    Simulate {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long, default_value = "pro")]
        x: Difficulty,
        #[arg(long, default_value = "friendly")]
        o: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a game in the terminal
    Play {
        #[arg(long)]
        bot: Option<Mark>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_delay: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Ticky".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = config::get_config_manager(args.config).get_config()?;

    match args.command {
        Command::Suggest { board, bot, difficulty, seed, no_delay } => {
            let difficulty = difficulty.unwrap_or(config.bot.difficulty);
            let thinking_time = if no_delay {
                Duration::ZERO
            } else {
                config.bot.thinking_time(difficulty)
            };
            commands::run_suggest(
                &board,
                bot.unwrap_or(config.bot.bot_mark),
                difficulty,
                thinking_time,
                seed,
            )
            .await?;
        }
        Command::Simulate { games, x, o, seed } => {
            let games = games.unwrap_or(config.simulation.games);
            if games == 0 {
                return Err("games must be greater than 0".into());
            }
            commands::run_simulate(x, o, games, seed.or(config.simulation.seed)).await?;
        }
        Command::Play { bot, difficulty, seed, no_delay } => {
            commands::run_play(
                difficulty.unwrap_or(config.bot.difficulty),
                bot.unwrap_or(config.bot.bot_mark),
                &config.bot,
                no_delay,
                seed,
            )
            .await?;
        }
    }

    log!("Done");
    Ok(())
}
