use thiserror::Error;

use crate::tictactoe::{Player, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    InvalidPosition { row: usize, col: usize },

    #[error("board must have exactly 9 cells, got {cells}")]
    InvalidBoard { cells: usize },

    #[error("invalid cell character '{character}' at cell {index}")]
    InvalidCell { character: char, index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("cell {position} is already marked")]
    CellOccupied { position: Position },
}
