use tictactoe_common::tictactoe::{
    Board, BotType, GameStatus, Player, Position, SessionRng, TicTacToeGameState, calculate_move,
};
use tictactoe_common::{TicTacToeError, log};

pub struct SelfPlaySettings {
    pub start: Board,
    pub side_to_move: Player,
    pub opponent_bot: BotType,
    pub seed: u64,
}

#[derive(Debug)]
pub struct PlayedMove {
    pub player: Player,
    pub position: Position,
    pub board: Board,
}

#[derive(Debug)]
pub struct SelfPlayReport {
    pub seed: u64,
    pub moves: Vec<PlayedMove>,
    pub status: GameStatus,
}

/// Side to move on a board reached by alternating play from `first_player`.
pub fn infer_side_to_move(board: &Board, first_player: Player) -> Player {
    if board.count(first_player) > board.count(first_player.other()) {
        first_player.other()
    } else {
        first_player
    }
}

/// Plays minimax (Me) against `opponent_bot` (Opponent) until the game ends.
pub fn play_game(settings: &SelfPlaySettings) -> Result<SelfPlayReport, TicTacToeError> {
    let mut state = TicTacToeGameState::from_board(settings.start, settings.side_to_move);
    let mut rng = SessionRng::new(settings.seed);
    let mut moves = Vec::new();

    log!(
        "Self-play: {} to move, opponent bot {}, seed {}",
        settings.side_to_move,
        settings.opponent_bot,
        settings.seed
    );

    while !state.status().is_over {
        let player = state.current_player();
        let bot_type = match player {
            Player::Me => BotType::Minimax,
            Player::Opponent => settings.opponent_bot,
        };

        let Some(position) = calculate_move(bot_type, state.board(), player, &mut rng) else {
            break;
        };

        state.place_mark(player, position)?;
        moves.push(PlayedMove {
            player,
            position,
            board: *state.board(),
        });
    }

    let status = state.status();
    log!(
        "Self-play finished after {} moves: {}",
        moves.len(),
        status.outcome().message()
    );

    Ok(SelfPlayReport {
        seed: settings.seed,
        moves,
        status,
    })
}
