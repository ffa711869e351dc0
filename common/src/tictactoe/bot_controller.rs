use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::debug_log;
use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Player, Position};
use super::win_detector::get_game_status;

/// Full-width bounds for a top-level search.
pub const SCORE_MIN: i32 = i32::MIN;
pub const SCORE_MAX: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_position: Option<Position>,
    pub score: i32,
}

/// Minimax with alpha-beta pruning. Me maximizes, Opponent minimizes.
///
/// Candidates are tried in row-major order and only a strict improvement
/// replaces the saved move, so the first optimal cell wins ties. Once
/// `alpha >= beta` the remaining candidates of this ply are skipped.
pub fn search(board: &Board, side_to_move: Player, mut alpha: i32, mut beta: i32) -> SearchResult {
    let status = get_game_status(board);
    if status.is_over {
        return SearchResult {
            best_position: None,
            score: status.score(),
        };
    }

    let candidates = board.available_moves();
    let maximizing = side_to_move.is_maximizing();
    let mut saved_position = None;

    for &pos in &candidates {
        let child = board.with_mark(pos, side_to_move);
        let result = search(&child, side_to_move.other(), alpha, beta);

        if maximizing {
            if result.score > alpha {
                alpha = result.score;
                saved_position = Some(pos);
            }
        } else if result.score < beta {
            beta = result.score;
            saved_position = Some(pos);
        }

        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        // A node whose window was never beaten still names a legal move.
        best_position: saved_position.or_else(|| candidates.first().copied()),
        score: if maximizing { alpha } else { beta },
    }
}

pub fn best_move(board: &Board, side_to_move: Player) -> SearchResult {
    search(board, side_to_move, SCORE_MIN, SCORE_MAX)
}

/// Scores every root move on the rayon pool, then applies the same
/// first-optimal tie-break as [`best_move`].
pub fn search_parallel(board: &Board, side_to_move: Player) -> SearchResult {
    let status = get_game_status(board);
    if status.is_over {
        return SearchResult {
            best_position: None,
            score: status.score(),
        };
    }

    let scored: Vec<(Position, i32)> = board
        .available_moves()
        .into_par_iter()
        .map(|pos| {
            let child = board.with_mark(pos, side_to_move);
            (pos, best_move(&child, side_to_move.other()).score)
        })
        .collect();

    let maximizing = side_to_move.is_maximizing();
    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in scored {
        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => SearchResult {
            best_position: Some(pos),
            score,
        },
        None => SearchResult {
            best_position: None,
            score: status.score(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Random => write!(f, "random"),
            BotType::Minimax => write!(f, "minimax"),
        }
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(BotType::Random),
            "minimax" => Ok(BotType::Minimax),
            other => Err(format!("Unknown bot type '{}', expected random or minimax", other)),
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    side: Player,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => calculate_minimax_move(board, side),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if get_game_status(board).is_over {
        return None;
    }
    let available_moves = board.available_moves();
    let idx = rng.random_index(available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board, side: Player) -> Option<Position> {
    let result = best_move(board, side);
    if let Some(pos) = result.best_position {
        debug_log!("Minimax picked {} for {} with score {}", pos, side, result.score);
    }
    result.best_position
}
