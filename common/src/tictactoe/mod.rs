mod board;
mod bot_controller;
mod game_state;
mod notation;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotType, SCORE_MAX, SCORE_MIN, SearchResult, best_move, calculate_minimax_move,
    calculate_move, search, search_parallel,
};
pub use game_state::TicTacToeGameState;
pub use notation::BoardNotation;
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Player, Position};
pub use win_detector::{
    DRAW_SCORE, GameStatus, LINES, LOSS_SCORE, Outcome, WIN_SCORE, WinningLine, get_game_status,
    winning_line,
};
