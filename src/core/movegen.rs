use crate::core::definitions::{Point, Square};
use crate::core::engine::{Board, PieceKind};

/** Diagonal offsets a piece may travel at step size `delta`.
 *
 * Black pieces get the `+delta` rows, White pieces the `-delta` rows and kings
 * both. `delta` is 1 for simple moves and 2 for skips. Cells without a piece
 * get nothing. */
pub fn raw_offsets(kind: PieceKind, delta: i32) -> Vec<Point> {
    let Some(color) = kind.color() else {
        return Vec::new();
    };
    let mut rows = vec![color.forward()];
    if kind.is_king() {
        rows.push(color.opposite().forward());
    }
    rows.into_iter()
        .flat_map(|row| {
            [
                Point::new(delta, row * delta),
                Point::new(-delta, row * delta),
            ]
        })
        .collect()
}

fn destinations(board: &Board, square: Square, delta: i32) -> impl Iterator<Item = Square> {
    let origin = square.point();
    let offsets = if square.is_valid() {
        raw_offsets(board.get(square), delta)
    } else {
        Vec::new()
    };
    offsets
        .into_iter()
        .map(move |offset| Square::from_point(origin + offset))
}

/** Empty squares one diagonal step away that the piece on `square` may move to. */
pub fn candidate_moves(board: &Board, square: Square) -> Vec<Square> {
    destinations(board, square, 1)
        .filter(|&end| board.get(end) == PieceKind::Empty)
        .collect()
}

/** Landing squares of every skip available to the piece on `square`. */
pub fn candidate_skips(board: &Board, square: Square) -> Vec<Square> {
    destinations(board, square, 2)
        .filter(|&end| is_valid_skip(board, square, end))
        .collect()
}

/** A jump from `start` over exactly one opposing piece into an empty `end`.
 *
 * Direction is not checked here, `raw_offsets` takes care of that during
 * generation. */
pub fn is_valid_skip(board: &Board, start: Square, end: Square) -> bool {
    if board.get(end) != PieceKind::Empty {
        return false;
    }
    let jumped = board.get(board.midpoint(start, end));
    match (board.get(start).color(), jumped.color()) {
        (Some(color), Some(jumped_color)) => color != jumped_color,
        _ => false,
    }
}
