mod commands;
mod config;
mod self_play;

use clap::{Parser, Subcommand};
use tictactoe_common::tictactoe::{BotType, Player, SessionRng};
use tictactoe_common::{debug_log, logger};

use config::{SolverConfig, open_config_store};

#[derive(Parser)]
#[command(name = "tictactoe_solver", about = "Game status and optimal moves for 3x3 tic-tac-toe")]
struct Args {
    /// Config file, defaults to tictactoe_solver_config.yaml next to the binary
    #[arg(long, global = true)]
    config: Option<String>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the game is over, the winner and the winning line
    Status { board: String },
    /// Optimal move for one side
    BestMove {
        board: String,
        #[arg(long, default_value = "me")]
        side: Player,
        /// Score root moves in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Play minimax (me) against a bot (opponent) until the game ends
    SelfPlay {
        #[arg(long)]
        board: Option<String>,
        #[arg(long)]
        first: Option<Player>,
        #[arg(long)]
        opponent_bot: Option<BotType>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default config file
    InitConfig {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let store = open_config_store(args.config.as_deref());
    // A broken config file must not stop `init-config --force` from replacing it.
    let mut config: SolverConfig = if matches!(args.command, Command::InitConfig { .. }) {
        SolverConfig::default()
    } else {
        store.load()?
    };

    let (prefix, verbose) = commands::log_settings(&config, args.use_log_prefix, args.verbose);
    logger::init_logger(prefix, verbose);
    debug_log!("Config file: {}", store.path().display());

    match args.command {
        Command::Status { board } => {
            println!("{}", commands::run_status(&config, &board)?);
        }
        Command::BestMove {
            board,
            side,
            parallel,
        } => {
            println!("{}", commands::run_best_move(&config, &board, side, parallel)?);
        }
        Command::SelfPlay {
            board,
            first,
            opponent_bot,
            seed,
        } => {
            if let Some(bot) = opponent_bot {
                config.self_play.opponent_bot = bot;
            }
            let seed = seed
                .or(config.self_play.seed)
                .unwrap_or_else(|| SessionRng::from_random().seed());
            println!(
                "{}",
                commands::run_self_play(&config, board.as_deref(), first, seed)?
            );
        }
        Command::InitConfig { force } => {
            println!("{}", commands::run_init_config(&store, force)?);
        }
    }

    Ok(())
}
