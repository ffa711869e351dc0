use super::board::Board;
use super::types::{Player, Position};

pub type WinningLine = [Position; 3];

/// Every line in scan order: rows, then columns, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    /// Result text from the point of view of the automated side.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::InProgress => "Game in progress",
            Outcome::Won(Player::Me) => "Me won",
            Outcome::Won(Player::Opponent) => "Opponent won",
            Outcome::Draw => "Draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub is_over: bool,
    pub winner: Option<Player>,
    pub winning_line: Option<WinningLine>,
}

impl GameStatus {
    /// +1 when Me won, -1 when Opponent won, 0 otherwise.
    pub fn score(&self) -> i32 {
        match self.winner {
            Some(Player::Me) => WIN_SCORE,
            Some(Player::Opponent) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.is_over, self.winner) {
            (false, _) => Outcome::InProgress,
            (true, Some(player)) => Outcome::Won(player),
            (true, None) => Outcome::Draw,
        }
    }
}

pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = player.mark();
    LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}

pub fn get_game_status(board: &Board) -> GameStatus {
    // Me is checked first, so a board where both sides own a line reports Me.
    for player in [Player::Me, Player::Opponent] {
        if let Some(line) = winning_line(board, player) {
            return GameStatus {
                is_over: true,
                winner: Some(player),
                winning_line: Some(line),
            };
        }
    }

    GameStatus {
        is_over: board.is_full(),
        winner: None,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tictactoe::{Mark, BOARD_SIZE};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    /// Straightforward line check written independently of `LINES`.
    fn naive_winner(board: &Board) -> Option<Player> {
        let cell = |r: usize, c: usize| board.get(pos(r, c)).player();
        let mut found = None;
        for player in [Player::Opponent, Player::Me] {
            let owns = |r: usize, c: usize| cell(r, c) == Some(player);
            let any_row = (0..BOARD_SIZE).any(|r| (0..BOARD_SIZE).all(|c| owns(r, c)));
            let any_col = (0..BOARD_SIZE).any(|c| (0..BOARD_SIZE).all(|r| owns(r, c)));
            let diag = (0..BOARD_SIZE).all(|i| owns(i, i));
            let anti = (0..BOARD_SIZE).all(|i| owns(i, BOARD_SIZE - 1 - i));
            if any_row || any_col || diag || anti {
                found = Some(player);
            }
        }
        found
    }

    fn collect_terminal_boards(
        board: Board,
        to_move: Player,
        seen: &mut HashSet<(Board, Player)>,
        terminals: &mut Vec<Board>,
    ) {
        if !seen.insert((board, to_move)) {
            return;
        }
        if naive_winner(&board).is_some() || board.is_full() {
            terminals.push(board);
            return;
        }
        for pos in board.available_moves() {
            let child = board.with_mark(pos, to_move);
            collect_terminal_boards(child, to_move.other(), seen, terminals);
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        let status = get_game_status(&Board::empty());
        assert!(!status.is_over);
        assert_eq!(status.winner, None);
        assert_eq!(status.winning_line, None);
        assert_eq!(status.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_row_win() {
        let status = get_game_status(&board("XX./OOO/X.."));
        assert!(status.is_over);
        assert_eq!(status.winner, Some(Player::Me));
        assert_eq!(status.winning_line, Some([pos(1, 0), pos(1, 1), pos(1, 2)]));
        assert_eq!(status.score(), 1);
    }

    #[test]
    fn test_column_win() {
        let status = get_game_status(&board("OX./OX./.XO"));
        assert_eq!(status.winner, Some(Player::Opponent));
        assert_eq!(status.winning_line, Some([pos(0, 1), pos(1, 1), pos(2, 1)]));
        assert_eq!(status.score(), -1);
        assert_eq!(status.outcome(), Outcome::Won(Player::Opponent));
    }

    #[test]
    fn test_diagonal_wins() {
        let status = get_game_status(&board("O.X/.OX/X.O"));
        assert_eq!(status.winner, Some(Player::Me));
        assert_eq!(status.winning_line, Some([pos(0, 0), pos(1, 1), pos(2, 2)]));

        let status = get_game_status(&board("O.X/.XO/X.O"));
        assert_eq!(status.winner, Some(Player::Opponent));
        assert_eq!(status.winning_line, Some([pos(0, 2), pos(1, 1), pos(2, 0)]));
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        // Row 0 and column 0 both belong to Opponent; the row comes first.
        let status = get_game_status(&board("XXX/XOO/XOO"));
        assert_eq!(status.winner, Some(Player::Opponent));
        assert_eq!(status.winning_line, Some([pos(0, 0), pos(0, 1), pos(0, 2)]));

        // Column 2 and the anti-diagonal; the column comes first.
        let status = get_game_status(&board("XOO/XOO/OXO"));
        assert_eq!(status.winning_line, Some([pos(0, 2), pos(1, 2), pos(2, 2)]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let status = get_game_status(&board("XOX/XOO/OXX"));
        assert!(status.is_over);
        assert_eq!(status.winner, None);
        assert_eq!(status.winning_line, None);
        assert_eq!(status.score(), 0);
        assert_eq!(status.outcome(), Outcome::Draw);
        assert_eq!(status.outcome().message(), "Draw");
    }

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        let status = get_game_status(&board("XOX/OXO/OXX"));
        assert!(status.is_over);
        assert_eq!(status.winner, Some(Player::Opponent));
    }

    #[test]
    fn test_both_players_winning_reports_me() {
        let status = get_game_status(&board("XXX/OOO/..."));
        assert!(status.is_over);
        assert_eq!(status.winner, Some(Player::Me));
        assert_eq!(status.winning_line, Some([pos(1, 0), pos(1, 1), pos(1, 2)]));
    }

    #[test]
    fn test_status_is_idempotent() {
        let b = board("XO./.X./..O");
        let copy = b;
        assert_eq!(get_game_status(&b), get_game_status(&b));
        assert_eq!(b, copy);
    }

    #[test]
    fn test_never_more_than_one_winner_across_all_mark_layouts() {
        // 3^9 layouts, including unreachable ones.
        for code in 0..3usize.pow(9) {
            let mut rest = code;
            let cells: Vec<Mark> = (0..9)
                .map(|_| {
                    let mark = [Mark::Empty, Mark::Me, Mark::Opponent][rest % 3];
                    rest /= 3;
                    mark
                })
                .collect();
            let b = Board::from_cells(cells).unwrap();
            let status = get_game_status(&b);

            match status.winner {
                Some(player) => {
                    assert!(status.is_over);
                    let line = status.winning_line.unwrap();
                    assert!(line.iter().all(|&p| b.get(p) == player.mark()));
                }
                None => {
                    assert_eq!(status.winning_line, None);
                    assert_eq!(status.is_over, b.is_full());
                }
            }
        }
    }

    #[test]
    fn test_every_reachable_terminal_board() {
        let mut seen = HashSet::new();
        let mut terminals = Vec::new();
        for first in [Player::Opponent, Player::Me] {
            collect_terminal_boards(Board::empty(), first, &mut seen, &mut terminals);
        }
        assert!(!terminals.is_empty());

        for b in terminals {
            let status = get_game_status(&b);
            assert!(status.is_over, "{}", b);
            assert_eq!(status.winner, naive_winner(&b), "{}", b);
            if status.winner.is_none() {
                assert!(b.is_full());
            }
        }
    }
}
