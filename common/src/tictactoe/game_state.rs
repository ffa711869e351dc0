use crate::TicTacToeError;
use super::board::Board;
use super::types::{Player, Position};
use super::win_detector::{GameStatus, get_game_status};

/// Authoritative board across turns, with move validation and turn order.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self::from_board(Board::empty(), first_player)
    }

    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            current_player: side_to_move,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Moves applied through this state, not counting marks on the starting board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        get_game_status(&self.board)
    }

    pub fn place_mark(
        &mut self,
        player: Player,
        pos: Position,
    ) -> Result<GameStatus, TicTacToeError> {
        if self.status().is_over {
            return Err(TicTacToeError::GameOver);
        }

        if player != self.current_player {
            return Err(TicTacToeError::NotYourTurn { player });
        }

        if !self.board.is_empty_at(pos) {
            return Err(TicTacToeError::CellOccupied { position: pos });
        }

        self.board = self.board.with_mark(pos, player);
        self.last_move = Some(pos);
        self.move_count += 1;

        let status = self.status();
        if !status.is_over {
            self.current_player = player.other();
        }

        Ok(status)
    }
}
