use crate::core::definitions::{Point, Square};

pub const BOARD_SIZE: i32 = 8;
pub const CELL_COUNT: i32 = BOARD_SIZE * BOARD_SIZE;

/** Diagonal unit directions as (dx, dy) */
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn is_valid_point(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

#[inline]
pub fn is_valid_square(square: Square) -> bool {
    (0..CELL_COUNT).contains(&square.raw())
}

/** Row-major packing, anything off the board becomes `Square::NONE`. */
#[inline]
pub fn to_square(x: i32, y: i32) -> Square {
    if is_valid_point(x, y) {
        Square::new(y * BOARD_SIZE + x)
    } else {
        Square::NONE
    }
}

#[inline]
pub fn to_point(square: Square) -> Point {
    if is_valid_square(square) {
        Point::new(square.raw() % BOARD_SIZE, square.raw() / BOARD_SIZE)
    } else {
        Point::NONE
    }
}

/** Dark cells are the playable ones in the opening layout. */
#[inline]
pub fn is_dark(x: i32, y: i32) -> bool {
    (x + y) % 2 == 1
}

/** Square jumped over when moving from `a` to `b`.
 *
 * Only a move of exactly two diagonal steps has one; every other pair,
 * adjacent cells included, yields `Square::NONE`. */
pub fn midpoint(a: Square, b: Square) -> Square {
    if !is_valid_square(a) || !is_valid_square(b) {
        return Square::NONE;
    }
    let (from, to) = (to_point(a), to_point(b));
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx.abs() != 2 || dy.abs() != 2 {
        return Square::NONE;
    }
    to_square(from.x + dx / 2, from.y + dy / 2)
}

/** On-board squares one diagonal step away from `square`. */
pub fn diagonal_neighbours(square: Square) -> impl Iterator<Item = Square> {
    let origin = to_point(square);
    let valid = is_valid_square(square);
    DIAGONALS
        .into_iter()
        .filter(move |_| valid)
        .map(move |(dx, dy)| to_square(origin.x + dx, origin.y + dy))
        .filter(|neighbour| is_valid_square(*neighbour))
}
