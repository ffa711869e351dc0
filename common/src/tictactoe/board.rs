use std::fmt;
use std::str::FromStr;

use crate::TicTacToeError;
use super::notation::BoardNotation;
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Player, Position};

/// A 3x3 grid of marks. `Copy`, so every hypothetical move is a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Mark>) -> Result<Self, TicTacToeError> {
        if cells.len() != CELL_COUNT {
            return Err(TicTacToeError::InvalidBoard { cells: cells.len() });
        }
        let mut board = Self::empty();
        for (pos, mark) in Position::all().zip(cells) {
            board.cells[pos.row()][pos.col()] = mark;
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of the board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos.row()][pos.col()] = player.mark();
        next
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty_at(pos)).collect()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == player.mark())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardNotation::default().format_grid(self))
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardNotation::default().parse(s)
    }
}
