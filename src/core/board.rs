//! Board representation.
//!
//! ## Value semantics
//!
//! `Board` is a `Copy` array of nine cells. Every transition produces a new
//! board, so the search can explore any number of hypothetical futures from a
//! shared ancestor without the ancestor ever changing.
//!
//! ## Text format
//!
//! Boards parse from nine row-major cells. `X`/`O` (either case) are marks,
//! `.`, `_`, `-` and space are empty, and `/`, `|` and newlines are skipped:
//!
//! ```
//! use tictactoe_ab::core::{Board, Cell, Player};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(board.get(0, 1), Some(Cell::Taken(Player::X)));
//! assert_eq!(board.get(1, 2), Some(Cell::Empty));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::action::{Action, BOARD_SIDE, CELL_COUNT};
use super::player::Player;
use crate::error::{Error, Result};

/// The eight winning lines as row-major cell indices: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(Player::X) => 'X',
            Cell::Taken(Player::O) => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Taken(player)
    }
}

/// An immutable 3x3 position.
///
/// Every board reachable through this crate satisfies
/// `count(X) - count(O) ∈ {0, 1}`. Constructors that accept arbitrary cells
/// check this and fail with `Error::InvalidBoard`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; CELL_COUNT]", into = "[Cell; CELL_COUNT]")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from three rows of three cells.
    ///
    /// Fails when the mark counts could not arise from alternating play.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cells[r * BOARD_SIDE as usize + c] = *cell;
            }
        }
        Self::from_cells(cells)
    }

    /// Build a board from nine row-major cells, checking the count invariant.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self> {
        let board = Self { cells };
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        if x_count < o_count || x_count - o_count > 1 {
            return Err(Error::InvalidBoard { x_count, o_count });
        }
        Ok(board)
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Action::new(row, col).index().map(|i| self.cells[i])
    }

    /// Cell targeted by an action, or `None` when out of bounds.
    #[must_use]
    pub fn at(&self, action: Action) -> Option<Cell> {
        action.index().map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The board as three rows.
    #[must_use]
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / 3][i % 3] = *cell;
        }
        rows
    }

    /// Number of marks placed by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Taken(player))
            .count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Copy of this board with `index` set to `player`'s mark.
    ///
    /// Callers must have checked the index and emptiness.
    #[must_use]
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.cells[index] = Cell::Taken(player);
        self
    }
}

impl TryFrom<[Cell; CELL_COUNT]> for Board {
    type Error = Error;

    fn try_from(cells: [Cell; CELL_COUNT]) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Cell; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Taken(Player::X),
                'O' | 'o' => Cell::Taken(Player::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                '/' | '|' | '\n' | '\r' => continue,
                other => {
                    return Err(Error::InvalidCell {
                        character: other,
                        position: cells.len(),
                    })
                }
            };
            cells.push(cell);
        }

        let got = cells.len();
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| Error::InvalidBoardLength {
            expected: CELL_COUNT,
            got,
        })?;
        Self::from_cells(cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(f, "{}|{}|{}", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Taken(Player::X);
    const O: Cell = Cell::Taken(Player::O);

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_rows_layout() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]).unwrap();
        assert_eq!(board.get(0, 0), Some(X));
        assert_eq!(board.get(1, 1), Some(O));
        assert_eq!(board.cells()[4], O);
        assert_eq!(board.rows()[1], [E, O, E]);
    }

    #[test]
    fn test_from_rows_rejects_bad_counts() {
        // O ahead of X
        let err = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err, Error::InvalidBoard { x_count: 0, o_count: 1 });

        // X two ahead
        let err = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err, Error::InvalidBoard { x_count: 2, o_count: 0 });
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::empty();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.at(Action::new(0, 9)), None);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::empty();
        let next = board.with_mark(4, Player::X);
        assert_eq!(board.get(1, 1), Some(E));
        assert_eq!(next.get(1, 1), Some(X));
    }

    #[test]
    fn test_parse_separators_and_case() {
        let a: Board = "XX./OO./...".parse().unwrap();
        let b: Board = "xx_|oo_|___".parse().unwrap();
        let c: Board = "XX.\nOO.\n...".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.count(Player::X), 2);
        assert_eq!(a.count(Player::O), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>().unwrap_err(),
            Error::InvalidBoardLength { expected: 9, got: 2 }
        );
        assert_eq!(
            "XO.Z.....".parse::<Board>().unwrap_err(),
            Error::InvalidCell { character: 'Z', position: 3 }
        );
        assert_eq!(
            "OOO......".parse::<Board>().unwrap_err(),
            Error::InvalidBoard { x_count: 0, o_count: 3 }
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O/.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|.|O\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XOX/OX./...".parse().unwrap();
        let reparsed: Board = board.to_string().replace("-+-+-", "").parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_winning_lines_cover_each_cell() {
        let mut hits = [0usize; CELL_COUNT];
        for line in WINNING_LINES {
            for i in line {
                hits[i] += 1;
            }
        }
        // center sits on 4 lines, corners on 3, edges on 2
        assert_eq!(hits, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_board_serialization() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialization_checks_counts() {
        // O ahead of X cannot arise from alternating play.
        let json = r#"[{"Taken":"O"},"Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("X=0, O=1"));

        let json = serde_json::to_string(&[X, X, E, E, E, E, E, E, E]).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());

        let json = serde_json::to_string(&[X, E, E, E, O, E, E, E, E]).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board.get(1, 1), Some(O));
    }

    #[test]
    fn test_try_from_cells() {
        assert_eq!(
            Board::try_from([O, E, E, E, E, E, E, E, E]),
            Err(Error::InvalidBoard { x_count: 0, o_count: 1 })
        );
        let cells: [Cell; CELL_COUNT] = Board::empty().into();
        assert_eq!(cells, [E; CELL_COUNT]);
    }
}
