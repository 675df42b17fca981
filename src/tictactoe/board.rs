//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The symbol owned by one seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A single board cell; `None` means empty
pub type Cell = Option<Mark>;

/// A board coordinate, row and column both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// All nine cells in row-major order (top-left to bottom-right).
    ///
    /// Every search and enumeration walks the board in this order, which is
    /// what makes tie-breaking deterministic.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Create a position, rejecting coordinates outside the board
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < 3 && col < 3 {
            Ok(Position { row, col })
        } else {
            Err(Error::InvalidPosition { row, col })
        }
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Inverse of [`Position::index`]
    pub fn from_index(index: usize) -> Result<Self> {
        Position::new(index / 3, index % 3)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid.
///
/// The shape is fixed by the type, so a malformed board cannot be
/// constructed. This type implements `Copy`; the search engine relies on
/// that to work on a private scratch copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Put a mark on a cell.
    ///
    /// This does not check occupancy; [`crate::tictactoe::Game::play`] is the
    /// validating entry point. The search engine pairs every `place` with a
    /// [`Board::clear`].
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos}");
        self.cells[pos.row][pos.col] = Some(mark);
    }

    /// Empty a cell
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }

    /// Return a copy of the board with `mark` placed at `pos`
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Result<Board> {
        if !self.is_empty(pos) {
            return Err(Error::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        let mut next = *self;
        next.place(pos, mark);
        Ok(next)
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Count the cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(mark))
            .count()
    }

    fn parse_cell(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(None),
            other => Mark::from_char(other).map(Some),
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine row-major cell characters.
    ///
    /// `X`/`O` (either case, `0` for O) are marks; `.`, `_` and `-` are empty.
    /// Whitespace and `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, (&c, pos)) in chars.iter().zip(Position::ALL).enumerate() {
            let cell = Self::parse_cell(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[pos.row][pos.col] = cell;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.map_or('.', Mark::to_char))?;
            }
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        for pos in Position::ALL {
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(2, 2).is_ok());
        assert!(Position::new(3, 0).is_err());
        assert!(Position::new(0, 3).is_err());
        assert_eq!(Position::from_index(5).unwrap(), Position { row: 1, col: 2 });
        assert!(Position::from_index(9).is_err());
    }

    #[test]
    fn test_position_order_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let pos = Position::new(1, 1).unwrap();
        board.place(pos, Mark::X);
        assert_eq!(board.get(pos), Some(Mark::X));
        assert_eq!(board.count(Mark::X), 1);

        board.clear(pos);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_mark_rejects_occupied() {
        let pos = Position::new(0, 0).unwrap();
        let board = Board::new().with_mark(pos, Mark::O).unwrap();
        let err = board.with_mark(pos, Mark::X).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_empty_positions() {
        let board: Board = "XO. ... ..X".parse().unwrap();
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 6);
        assert_eq!(empty[0], Position { row: 0, col: 2 });
        assert!(!empty.contains(&Position { row: 2, col: 2 }));
    }

    #[test]
    fn test_from_str() {
        let board: Board = "xo_/-X0/...".parse().unwrap();
        assert_eq!(board.get(Position::at(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Position::at(0, 1)), Some(Mark::O));
        assert_eq!(board.get(Position::at(0, 2)), None);
        assert_eq!(board.get(Position::at(1, 2)), Some(Mark::O));

        assert!("XO".parse::<Board>().is_err());
        assert!("XOZ......".parse::<Board>().is_err());
        assert!("..........".parse::<Board>().is_err());
    }

    #[test]
    fn test_mark_from_str() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
        assert!("XO".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
    }

    #[test]
    fn test_display() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
