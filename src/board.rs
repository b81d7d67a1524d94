//! Square board snapshot.
//!
//! A `Board` is plain data: an N×N grid of optional stones with bounds
//! checking. All game logic lives in [`crate::rules`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The complementary color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board coordinate as `(row, col)`, zero-based from the top-left corner.
pub type Point = (usize, usize);

/// Why a grid could not be turned into a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("board has no rows")]
    Empty,
    #[error("board is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown board symbol {0:?}")]
    BadSymbol(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from row-major cells. Every row must have as many cells
    /// as there are rows.
    pub fn from_rows(rows: &[Vec<Option<Color>>]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != size {
                return Err(ShapeError::NotSquare {
                    row,
                    len: cols.len(),
                    expected: size,
                });
            }
            cells.extend_from_slice(cols);
        }
        Ok(Self { size, cells })
    }

    /// Row-major copy of the cells, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<Option<Color>>> {
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `pt`; `None` for empty cells and for points off the board.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    /// Overwrite a cell. `pt` must be on the board.
    pub fn set(&mut self, pt: Point, stone: Option<Color>) {
        let size = self.size;
        debug_assert!(self.contains(pt), "set({pt:?}) off a {size}x{size} board");
        let i = self.idx(pt);
        self.cells[i] = stone;
    }

    /// All empty points in row-major order.
    pub fn empty_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// Parses the diagram format produced by `Display`: one line per row,
/// `X` black, `O` white, `.` empty. Whitespace inside a row is ignored.
impl FromStr for Board {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                row.push(match ch {
                    'X' | 'x' => Some(Color::Black),
                    'O' | 'o' => Some(Color::White),
                    '.' => None,
                    other => return Err(ShapeError::BadSymbol(other)),
                });
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get((row, col)).map_or('.', Color::symbol);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
