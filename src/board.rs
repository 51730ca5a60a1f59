//! Grid geometry: colors, points, cells and neighbor lookup.
//!
//! The grid is a flat `Vec<Cell>` indexed row-major. Row 0 is the top row,
//! column 0 the left column. Points are plain coordinates, so groups and the
//! game state can refer to cells without holding references into the grid.

use std::fmt;

use crate::constants::{
    BLACK_CHAR, COLUMN_LETTERS, DELTA, EMPTY_CHAR, LARGE_BOARD, MEDIUM_BOARD, SMALL_BOARD,
    WHITE_CHAR,
};
use crate::error::{BoardSizeError, MoveError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Parse a GTP color argument (`b`, `black`, `w`, `white`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
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

/// A value kept separately for each color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerColor<T> {
    pub black: T,
    pub white: T,
}

impl<T> PerColor<T> {
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

/// A grid intersection, identified by zero-based (row, col).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the three standard board sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardSize {
    Small,
    Medium,
    Large,
}

impl BoardSize {
    pub fn len(self) -> usize {
        match self {
            BoardSize::Small => SMALL_BOARD,
            BoardSize::Medium => MEDIUM_BOARD,
            BoardSize::Large => LARGE_BOARD,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            SMALL_BOARD => Ok(BoardSize::Small),
            MEDIUM_BOARD => Ok(BoardSize::Medium),
            LARGE_BOARD => Ok(BoardSize::Large),
            other => Err(BoardSizeError(other)),
        }
    }
}

/// Where a cell sits relative to the board edge.
///
/// Only used to decide whether a point is fully surrounded; liberty counting
/// always walks the actual in-bounds neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BorderClass {
    Corner,
    Edge,
    Interior,
}

impl BorderClass {
    pub fn of(point: Point, n: usize) -> Self {
        let row_edge = point.row == 0 || point.row + 1 == n;
        let col_edge = point.col == 0 || point.col + 1 == n;
        match (row_edge, col_edge) {
            (true, true) => BorderClass::Corner,
            (true, false) | (false, true) => BorderClass::Edge,
            (false, false) => BorderClass::Interior,
        }
    }

    pub fn max_neighbors(self) -> usize {
        match self {
            BorderClass::Corner => 2,
            BorderClass::Edge => 3,
            BorderClass::Interior => 4,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub point: Point,
    pub border: BorderClass,
    pub occupant: Option<Color>,
}

/// The N x N array of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: BoardSize) -> Self {
        let n = size.len();
        let cells = (0..n * n)
            .map(|i| {
                let point = Point::new(i / n, i % n);
                Cell {
                    point,
                    border: BorderClass::of(point, n),
                    occupant: None,
                }
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length N.
    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.len() && point.col < self.len()
    }

    fn idx(&self, point: Point) -> usize {
        point.row * self.len() + point.col
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, MoveError> {
        let point = Point::new(row, col);
        if !self.contains(point) {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.len(),
            });
        }
        Ok(&self.cells[self.idx(point)])
    }

    /// Occupant of an in-bounds point. Out-of-bounds points read as empty.
    pub fn get(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        self.cells[self.idx(point)].occupant
    }

    pub(crate) fn set(&mut self, point: Point, occupant: Option<Color>) {
        let i = self.idx(point);
        self.cells[i].occupant = occupant;
    }

    pub fn border_of(&self, point: Point) -> BorderClass {
        self.cells[self.idx(point)].border
    }

    /// In-bounds orthogonal neighbors, in order up, right, down, left.
    pub fn neighbors_of(&self, point: Point) -> Vec<Point> {
        let n = self.len() as isize;
        let mut v = Vec::with_capacity(4);
        for (dr, dc) in DELTA {
            let r = point.row as isize + dr;
            let c = point.col as isize + dc;
            if (0..n).contains(&r) && (0..n).contains(&c) {
                v.push(Point::new(r as usize, c as usize));
            }
        }
        v
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(|c| c.occupant.is_none())
            .map(|c| c.point)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        for row in 0..n {
            write!(f, "{:>2} ", n - row)?;
            for col in 0..n {
                let ch = match self.get(Point::new(row, col)) {
                    Some(Color::Black) => BLACK_CHAR,
                    Some(Color::White) => WHITE_CHAR,
                    None => EMPTY_CHAR,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &letter in &COLUMN_LETTERS[..n] {
            write!(f, "{} ", letter as char)?;
        }
        writeln!(f)
    }
}

/// A move in text notation: either a point or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Play(Point),
}

/// Parse a vertex string (e.g., "D4", "pass") for a board of the given size.
///
/// Columns use letters A-T skipping I; rows count up from 1 at the bottom.
/// Returns `None` for malformed or off-board input.
pub fn parse_vertex(s: &str, size: BoardSize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    let n = size.len();
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let letter = bytes[0].to_ascii_uppercase();
    let col = COLUMN_LETTERS[..n].iter().position(|&c| c == letter)?;

    let digits = &s[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: usize = digits.parse().ok()?;
    if number == 0 || number > n {
        return None;
    }
    Some(Vertex::Play(Point::new(n - number, col)))
}

/// Convert a point to vertex notation (e.g., "D4").
pub fn vertex_string(point: Point, size: BoardSize) -> String {
    let letter = COLUMN_LETTERS[point.col] as char;
    format!("{letter}{}", size.len() - point.row)
}
