use log::trace;

use crate::core::definitions::{Move, Square};
use crate::core::engine::{Board, Color, PieceKind};
use crate::core::movegen::{candidate_moves, candidate_skips, is_valid_skip};
use crate::core::utils::{diagonal_neighbours, to_square};

/** Checks a move against the full rule set.
 *
 * `chain` is the square that is in the middle of a multi-capture, if any. While
 * it is set nothing but a further capture from that square is accepted. */
pub fn is_legal_move(
    board: &Board,
    side: Color,
    start: Square,
    end: Square,
    chain: Option<Square>,
) -> bool {
    let attempt = Move::new(start, end);
    if start == end {
        trace!("Rejected {attempt}: piece has to leave its square");
        return false;
    }
    let chain = chain.filter(|square| square.is_valid());
    if chain.is_some_and(|square| square != start) {
        trace!("Rejected {attempt}: capture chain in progress elsewhere");
        return false;
    }
    if board.get(end) != PieceKind::Empty {
        trace!("Rejected {attempt}: end square is not empty");
        return false;
    }
    let piece = board.get(start);
    if !piece.belongs_to(side) {
        trace!("Rejected {attempt}: no {side} piece on start square");
        return false;
    }

    let Some((dx, dy)) = attempt.delta() else {
        return false;
    };
    if dx.abs() != dy.abs() || !(1..=2).contains(&dx.abs()) {
        trace!("Rejected {attempt}: not a one or two step diagonal");
        return false;
    }
    if !piece.is_king() && dy.signum() != side.forward() {
        trace!("Rejected {attempt}: men only move forward");
        return false;
    }

    if dx.abs() == 1 {
        // Adjacent cells have no midpoint, so this never fires for a real board.
        if board.get(board.midpoint(start, end)).belongs_to(side.opposite()) {
            trace!("Rejected {attempt}: opponent piece in the way");
            return false;
        }
        if chain.is_some() {
            trace!("Rejected {attempt}: only captures may continue a chain");
            return false;
        }
        if any_capture_available(board, side) {
            trace!("Rejected {attempt}: a capture is available and must be taken");
            return false;
        }
        true
    } else if is_valid_skip(board, start, end) {
        true
    } else {
        trace!("Rejected {attempt}: nothing to capture");
        false
    }
}

/** Whether any man or king of `side` has a capture anywhere on the board. */
pub fn any_capture_available(board: &Board, side: Color) -> bool {
    board
        .pieces(side)
        .into_iter()
        .any(|square| !candidate_skips(board, square).is_empty())
}

/** Every legal move for `side`, captures first.
 *
 * With a chain in progress only captures of the chaining piece are listed. */
pub fn legal_moves(board: &Board, side: Color, chain: Option<Square>) -> Vec<Move> {
    let starts = match chain.filter(|square| square.is_valid()) {
        Some(square) => vec![square],
        None => board.pieces(side),
    };
    let skips: Vec<Move> = starts
        .iter()
        .flat_map(|&start| {
            candidate_skips(board, start)
                .into_iter()
                .map(move |end| Move::new(start, end))
        })
        .filter(|mv| is_legal_move(board, side, mv.start, mv.end, chain))
        .collect();
    if !skips.is_empty() {
        return skips;
    }
    starts
        .iter()
        .flat_map(|&start| {
            candidate_moves(board, start)
                .into_iter()
                .map(move |end| Move::new(start, end))
        })
        .filter(|mv| is_legal_move(board, side, mv.start, mv.end, chain))
        .collect()
}

/** Whether the piece on `square` survives the opponent's next move.
 *
 * Empty and off-board squares are always safe. Only single captures are
 * considered, each attacker keeping its own direction of travel. */
pub fn is_safe(board: &Board, square: Square) -> bool {
    let Some(color) = board.get(square).color() else {
        return true;
    };
    let target = square.point();
    !diagonal_neighbours(square)
        .filter(|&attacker| board.get(attacker).belongs_to(color.opposite()))
        .any(|attacker| {
            let from = attacker.point();
            let landing = to_square(2 * target.x - from.x, 2 * target.y - from.y);
            candidate_skips(board, attacker).contains(&landing)
        })
}
