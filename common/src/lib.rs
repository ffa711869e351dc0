//! Board evaluation and optimal move search for 3x3 tic-tac-toe.

mod error;
pub mod logger;
pub mod tictactoe;

pub use error::TicTacToeError;
