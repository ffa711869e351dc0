use tictactoe_common::tictactoe::{
    Board, BoardNotation, GameStatus, Player, SearchResult, best_move, get_game_status,
    search_parallel,
};
use tictactoe_common::{TicTacToeError, debug_log};

use crate::config::{ConfigError, SolverConfig, YamlConfigStore};
use crate::self_play::{SelfPlayReport, SelfPlaySettings, infer_side_to_move, play_game};

pub fn format_status(notation: &BoardNotation, board: &Board, status: &GameStatus) -> String {
    let mut lines = vec![
        notation.format_grid(board),
        format!("Over: {}", status.is_over),
    ];
    match status.winner {
        Some(winner) => lines.push(format!("Winner: {}", winner)),
        None => lines.push("Winner: none".to_string()),
    }
    if let Some(line) = status.winning_line {
        let cells: Vec<String> = line.iter().map(|pos| pos.to_string()).collect();
        lines.push(format!("Winning line: {}", cells.join(" ")));
    }
    lines.push(format!("Result: {}", status.outcome().message()));
    lines.join("\n")
}

pub fn format_best_move(side: Player, status: &GameStatus, result: &SearchResult) -> String {
    match result.best_position {
        Some(pos) => format!("Best move for {}: {} (score {})", side, pos, result.score),
        None => format!("No move for {}: {}", side, status.outcome().message()),
    }
}

pub fn format_self_play(notation: &BoardNotation, report: &SelfPlayReport) -> String {
    let mut lines = vec![format!("Seed: {}", report.seed)];
    for (turn, played) in report.moves.iter().enumerate() {
        lines.push(format!("{}. {} plays {}", turn + 1, played.player, played.position));
        lines.push(notation.format_grid(&played.board));
    }
    lines.push(format!("Result: {}", report.status.outcome().message()));
    lines.join("\n")
}

/// Log prefix and verbosity. A command-line flag or the config file can each
/// switch an option on.
pub fn log_settings(
    config: &SolverConfig,
    use_log_prefix: bool,
    verbose: bool,
) -> (Option<String>, bool) {
    let prefix = if use_log_prefix || config.log.use_prefix {
        Some("Solver".to_string())
    } else {
        None
    };
    (prefix, verbose || config.log.verbose)
}

pub fn use_parallel_root(config: &SolverConfig, parallel: bool) -> bool {
    parallel || config.search.parallel_root
}

pub fn run_status(config: &SolverConfig, board_text: &str) -> Result<String, TicTacToeError> {
    let board = config.notation.parse(board_text)?;
    let status = get_game_status(&board);
    Ok(format_status(&config.notation, &board, &status))
}

pub fn run_best_move(
    config: &SolverConfig,
    board_text: &str,
    side: Player,
    parallel: bool,
) -> Result<String, TicTacToeError> {
    let board = config.notation.parse(board_text)?;
    let status = get_game_status(&board);
    let result = if use_parallel_root(config, parallel) {
        debug_log!("Scoring root moves in parallel");
        search_parallel(&board, side)
    } else {
        best_move(&board, side)
    };
    Ok(format_best_move(side, &status, &result))
}

pub fn run_self_play(
    config: &SolverConfig,
    board_text: Option<&str>,
    first: Option<Player>,
    seed: u64,
) -> Result<String, TicTacToeError> {
    let start = match board_text {
        Some(text) => config.notation.parse(text)?,
        None => Board::empty(),
    };
    let first_player = first.unwrap_or(config.self_play.first_player);
    let settings = SelfPlaySettings {
        start,
        side_to_move: infer_side_to_move(&start, first_player),
        opponent_bot: config.self_play.opponent_bot,
        seed,
    };
    let report = play_game(&settings)?;
    Ok(format_self_play(&config.notation, &report))
}

pub fn run_init_config(
    store: &YamlConfigStore<SolverConfig>,
    force: bool,
) -> Result<String, ConfigError> {
    if store.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: store.path().to_path_buf(),
        });
    }
    store.save(&SolverConfig::default())?;
    Ok(format!("Wrote default config to {}", store.path().display()))
}
