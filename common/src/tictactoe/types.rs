use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TicTacToeError;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides. `Me` is the side the search maximizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Me,
    Opponent,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Me => Player::Opponent,
            Player::Opponent => Player::Me,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::Me => Mark::Me,
            Player::Opponent => Mark::Opponent,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::Me
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Me => write!(f, "Me"),
            Player::Opponent => write!(f, "Opponent"),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "me" => Ok(Player::Me),
            "opponent" => Ok(Player::Opponent),
            other => Err(format!("Unknown player '{}', expected me or opponent", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Me,
    Opponent,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Me => Some(Player::Me),
            Mark::Opponent => Some(Player::Opponent),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// A cell coordinate. Always within the board once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self, TicTacToeError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(TicTacToeError::InvalidPosition { row, col });
        }
        Ok(Self { row, col })
    }

    /// Callers guarantee both coordinates are in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Result<Self, TicTacToeError> {
        if index >= CELL_COUNT {
            return Err(TicTacToeError::InvalidPosition {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            });
        }
        Ok(Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major rank, used as the tie-break order of the search.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position::at(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
