use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::core::definitions::{BoardParseError, Point, Square};
use crate::core::utils::{
    is_dark, is_valid_point, is_valid_square, midpoint, to_point, to_square, BOARD_SIZE,
    CELL_COUNT,
};

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /** Row direction men of this color advance in. */
    pub fn forward(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /** Row on which a man of this color gets crowned. */
    pub fn crowning_row(self) -> i32 {
        match self {
            Color::Black => BOARD_SIZE - 1,
            Color::White => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Color::Black => "Black",
            Color::White => "White",
        })
    }
}

/** Content of a single board cell.
 *
 * `Empty` and `OutOfBounds` never belong to a player. */
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[default]
    Empty,
    OutOfBounds,
    BlackMan,
    BlackKing,
    WhiteMan,
    WhiteKing,
}

impl PieceKind {
    pub fn new(color: Color, king: bool) -> PieceKind {
        match (color, king) {
            (Color::Black, false) => PieceKind::BlackMan,
            (Color::Black, true) => PieceKind::BlackKing,
            (Color::White, false) => PieceKind::WhiteMan,
            (Color::White, true) => PieceKind::WhiteKing,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            PieceKind::BlackMan | PieceKind::BlackKing => Some(Color::Black),
            PieceKind::WhiteMan | PieceKind::WhiteKing => Some(Color::White),
            PieceKind::Empty | PieceKind::OutOfBounds => None,
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, PieceKind::BlackKing | PieceKind::WhiteKing)
    }

    pub fn is_piece(self) -> bool {
        self.color().is_some()
    }

    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn crowned(self) -> PieceKind {
        match self {
            PieceKind::BlackMan => PieceKind::BlackKing,
            PieceKind::WhiteMan => PieceKind::WhiteKing,
            other => other,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::OutOfBounds => '#',
            PieceKind::BlackMan => 'b',
            PieceKind::BlackKing => 'B',
            PieceKind::WhiteMan => 'w',
            PieceKind::WhiteKing => 'W',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<PieceKind> {
        Some(match symbol {
            '.' | '-' => PieceKind::Empty,
            '#' => PieceKind::OutOfBounds,
            'b' => PieceKind::BlackMan,
            'B' => PieceKind::BlackKing,
            'w' => PieceKind::WhiteMan,
            'W' => PieceKind::WhiteKing,
            _ => return None,
        })
    }
}

/** Plain 8x8 grid, row-major, row 0 on Black's side. */
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde_as(as = "[_; 64]")]
    cells: [PieceKind; CELL_COUNT as usize],
}

impl Board {
    /** Board without any pieces. */
    pub fn new() -> Board {
        Board {
            cells: [PieceKind::Empty; CELL_COUNT as usize],
        }
    }

    /** Parse a diagram of 8 rows, row 0 first.
     *
     * `.`/`-` empty, `b`/`B` black man/king, `w`/`W` white man/king, `#` a
     * cell taken out of play. Spaces are ignored, blank lines skipped. */
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardParseError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardParseError::RowCount(rows.len()));
        }
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE as usize {
                return Err(BoardParseError::RowLength {
                    row: y,
                    length: row.len(),
                });
            }
            for (x, &symbol) in row.iter().enumerate() {
                let kind = PieceKind::from_symbol(symbol)
                    .ok_or(BoardParseError::Symbol { row: y, symbol })?;
                board.set(to_square(x as i32, y as i32), kind);
            }
        }
        Ok(board)
    }

    pub fn get(&self, square: Square) -> PieceKind {
        square
            .index()
            .map_or(PieceKind::OutOfBounds, |index| self.cells[index])
    }

    pub fn at(&self, x: i32, y: i32) -> PieceKind {
        self.get(to_square(x, y))
    }

    /** Writes are ignored for squares off the board. */
    pub fn set(&mut self, square: Square, kind: PieceKind) {
        if let Some(index) = square.index() {
            self.cells[index] = kind;
        }
    }

    pub fn find(&self, kind: PieceKind) -> Vec<Square> {
        self.iter()
            .filter(|&(_, cell)| cell == kind)
            .map(|(square, _)| square)
            .collect()
    }

    /** Squares holding men or kings of `color`. */
    pub fn pieces(&self, color: Color) -> Vec<Square> {
        self.iter()
            .filter(|&(_, cell)| cell.belongs_to(color))
            .map(|(square, _)| square)
            .collect()
    }

    pub fn midpoint(&self, a: Square, b: Square) -> Square {
        midpoint(a, b)
    }

    pub fn is_valid_square(square: Square) -> bool {
        is_valid_square(square)
    }

    pub fn is_valid_point(x: i32, y: i32) -> bool {
        is_valid_point(x, y)
    }

    pub fn to_square(x: i32, y: i32) -> Square {
        to_square(x, y)
    }

    pub fn to_point(square: Square) -> Point {
        to_point(square)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| (Square::new(index as i32), cell))
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.iter().filter(|(_, cell)| cell.is_piece())
    }
}

impl Default for Board {
    /** Opening layout: three rows of men on the dark cells for each side. */
    fn default() -> Self {
        let mut board = Board::new();
        for y in 0..BOARD_SIZE {
            for x in (0..BOARD_SIZE).filter(|&x| is_dark(x, y)) {
                let kind = match y {
                    0..=2 => PieceKind::BlackMan,
                    5..=7 => PieceKind::WhiteMan,
                    _ => continue,
                };
                board.set(to_square(x, y), kind);
            }
        }
        board
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE).map(|x| self.at(x, y).symbol()).collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
