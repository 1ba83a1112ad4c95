use std::fmt::Display;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::core::engine::Color;
use crate::core::utils::{is_valid_square, to_point, to_square, CELL_COUNT};

/** Cell of the 8x8 board, packed row-major as `y * 8 + x`.
 *
 * Every index or coordinate outside the board collapses into `Square::NONE`,
 * so lookups never have to deal with a half-valid value. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(i8);

impl Square {
    pub const NONE: Square = Square(-1);

    pub fn new(index: i32) -> Square {
        if (0..CELL_COUNT).contains(&index) {
            Square(index as i8)
        } else {
            Square::NONE
        }
    }

    pub fn from_point(point: Point) -> Square {
        to_square(point.x, point.y)
    }

    pub fn raw(self) -> i32 {
        self.0 as i32
    }

    pub fn index(self) -> Option<usize> {
        self.is_valid().then_some(self.0 as usize)
    }

    pub fn is_valid(self) -> bool {
        is_valid_square(self)
    }

    pub fn point(self) -> Point {
        to_point(self)
    }
}

impl From<Point> for Square {
    fn from(value: Point) -> Self {
        Square::from_point(value)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            let point = self.point();
            write!(f, "({}, {})", point.x, point.y)
        } else {
            f.pad("(--)")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const NONE: Point = Point { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    pub fn new(start: Square, end: Square) -> Move {
        Move { start, end }
    }

    /** Shortcut for tests and callers thinking in coordinates. */
    pub fn between(from: (i32, i32), to: (i32, i32)) -> Move {
        Move::new(to_square(from.0, from.1), to_square(to.0, to.1))
    }

    /** (dx, dy) from start to end, `None` if either end is off the board. */
    pub fn delta(&self) -> Option<(i32, i32)> {
        if !self.start.is_valid() || !self.end.is_valid() {
            return None;
        }
        let (from, to) = (self.start.point(), self.end.point());
        Some((to.x - from.x, to.y - from.y))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self.delta(), Some((dx, dy)) if dx.abs() == 2 && dy.abs() == 2)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /** side to move, no capture in progress */
    PlayerMove(Color),
    /** side to move, square that has to keep capturing */
    Chaining(Color, Square),
    /** winner */
    Finished(Color),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    RowCount(usize),
    RowLength { row: usize, length: usize },
    Symbol { row: usize, symbol: char },
}

impl Display for BoardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardParseError::RowCount(count) => {
                write!(f, "board diagram must have 8 rows, found {count}")
            }
            BoardParseError::RowLength { row, length } => {
                write!(f, "row {row} must have 8 cells, found {length}")
            }
            BoardParseError::Symbol { row, symbol } => {
                write!(f, "unknown symbol {symbol:?} in row {row}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
