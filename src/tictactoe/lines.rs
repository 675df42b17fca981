//! Winning line analysis and terminal outcome evaluation

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Position};

/// Three board coordinates forming one winning combination
pub type Line = [Position; 3];

/// The eight winning lines: rows, then columns, then diagonals
pub const LINES: [Line; 8] = [
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)], // rows
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)], // columns
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)], // diagonals
];

/// Result of evaluating a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
    Undetermined,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undetermined)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Mark owning the first completed line, if any
pub fn line_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| board.get(line[0]))
}

/// First completed line in the fixed order
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let first = board.get(a);
        first.is_some() && first == board.get(b) && first == board.get(c)
    })
}

/// True iff every cell is set
pub fn is_full(board: &Board) -> bool {
    Position::ALL.iter().all(|&pos| !board.is_empty(pos))
}

/// Evaluate the board: a completed line wins, a full board draws
pub fn outcome(board: &Board) -> Outcome {
    match line_winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Undetermined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_lines_are_distinct_triples() {
        for line in LINES {
            assert!(line[0] != line[1] && line[1] != line[2] && line[0] != line[2]);
        }
        let mut sorted = LINES.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_winner_horizontal() {
        assert_eq!(line_winner(&board("XXX OO. ...")), Some(Mark::X));
    }

    #[test]
    fn test_winner_vertical() {
        let b = board("O.X O.X O..");
        assert_eq!(line_winner(&b), Some(Mark::O));
        assert_eq!(
            winning_line(&b),
            Some([Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let b = board("OOX .X. X..");
        assert_eq!(line_winner(&b), Some(Mark::X));
        assert_eq!(winning_line(&b), Some(LINES[7]));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(line_winner(&Board::new()), None);
        assert_eq!(line_winner(&board("XOX XOO OXX")), None);
    }

    #[test]
    fn test_is_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_full(&board("XOX XOO OX.")));
        assert!(is_full(&board("XOX XOO OXX")));
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&Board::new()), Outcome::Undetermined);
        assert_eq!(outcome(&board("XOX XOO OXX")), Outcome::Draw);
        // a win on the last cell is a win, not a draw
        assert_eq!(outcome(&board("XOX OXO OXX")), Outcome::Win(Mark::X));
        assert!(outcome(&board("OOO XX. X..")).is_terminal());
        assert_eq!(outcome(&board("OOO XX. X..")).winner(), Some(Mark::O));
    }
}
