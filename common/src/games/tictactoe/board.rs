use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
/// Cells Ticky opens with on an empty board: the center and the four corners.
pub const OPENING_MOVES: [usize; 5] = [0, 2, 4, 6, 8];

/// 3x3 board, cells indexed 0..9 row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut board = *self;
        board.set(index, mark);
        board
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    WrongCellCount { found: usize },
    InvalidCell { character: char, position: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongCellCount { found } => {
                write!(f, "Board must have {} cells, found {}", CELL_COUNT, found)
            }
            BoardParseError::InvalidCell { character, position } => {
                write!(f, "Invalid cell '{}' at position {}", character, position)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`, `O` and `_`, `.` or `-` for empty cells. Whitespace and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut found = 0;

        for character in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let mark = match character {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' | '-' => Mark::Empty,
                _ => return Err(BoardParseError::InvalidCell { character, position: found }),
            };
            if found < CELL_COUNT {
                cells[found] = mark;
            }
            found += 1;
        }

        if found != CELL_COUNT {
            return Err(BoardParseError::WrongCellCount { found });
        }
        Ok(Self { cells })
    }
}
