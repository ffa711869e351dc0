use serde::{Deserialize, Serialize};

use crate::TicTacToeError;
use super::board::Board;
use super::types::{CELL_COUNT, Mark};

const ROW_SEPARATOR: char = '/';
const EMPTY_ALIASES: [char; 3] = ['.', '_', '-'];

/// Characters used to read and write boards as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardNotation {
    pub me: char,
    pub opponent: char,
    pub empty: char,
}

impl Default for BoardNotation {
    fn default() -> Self {
        Self {
            me: 'O',
            opponent: 'X',
            empty: '.',
        }
    }
}

impl BoardNotation {
    pub fn validate(&self) -> Result<(), String> {
        for symbol in [self.me, self.opponent, self.empty] {
            if symbol.is_whitespace() || symbol == ROW_SEPARATOR {
                return Err(format!("Symbol '{}' cannot be used in board notation", symbol));
            }
        }
        if self.me == self.opponent || self.me == self.empty || self.opponent == self.empty {
            return Err(format!(
                "Notation symbols must be distinct, got me='{}' opponent='{}' empty='{}'",
                self.me, self.opponent, self.empty
            ));
        }
        if EMPTY_ALIASES.contains(&self.me) || EMPTY_ALIASES.contains(&self.opponent) {
            return Err("Player symbols cannot be one of '.', '_', '-'".to_string());
        }
        Ok(())
    }

    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => self.empty,
            Mark::Me => self.me,
            Mark::Opponent => self.opponent,
        }
    }

    /// Reads nine cells, optionally split into rows by `/` or whitespace.
    pub fn parse(&self, text: &str) -> Result<Board, TicTacToeError> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for character in text
            .chars()
            .filter(|&c| c != ROW_SEPARATOR && !c.is_whitespace())
        {
            let mark = if character == self.me {
                Mark::Me
            } else if character == self.opponent {
                Mark::Opponent
            } else if character == self.empty || EMPTY_ALIASES.contains(&character) {
                Mark::Empty
            } else {
                return Err(TicTacToeError::InvalidCell {
                    character,
                    index: cells.len(),
                });
            };
            cells.push(mark);
        }
        Board::from_cells(cells)
    }

    pub fn format(&self, board: &Board) -> String {
        self.row_strings(board).join("/")
    }

    pub fn format_grid(&self, board: &Board) -> String {
        self.row_strings(board).join("\n")
    }

    fn row_strings(&self, board: &Board) -> Vec<String> {
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(|&mark| self.symbol(mark)).collect())
            .collect()
    }
}
