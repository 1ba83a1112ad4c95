use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::definitions::{GameState, Move, Square};
use crate::core::engine::{Board, Color, PieceKind};
use crate::core::logic::{is_legal_move, legal_moves};
use crate::core::movegen::candidate_skips;

/** Turn bookkeeping around a board.
 *
 * The rules themselves live in `logic`, the game only feeds them its state and
 * applies the moves they accept. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    chain: Option<Square>,
}

impl Game {
    /** Opening position, Black to move. */
    pub fn new() -> Game {
        Game::with_board(Board::default(), Color::Black)
    }

    pub fn with_board(board: Board, turn: Color) -> Game {
        Game {
            board,
            turn,
            chain: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_board(&self) -> Board {
        self.board.clone()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn black_to_move(&self) -> bool {
        self.turn == Color::Black
    }

    /** Square that has to continue capturing before the turn ends. */
    pub fn active_chain_square(&self) -> Option<Square> {
        self.chain
    }

    /** Independent copy for speculative play. */
    pub fn snapshot(&self) -> Game {
        self.clone()
    }

    pub fn reset(&mut self) {
        debug!("Game reset");
        *self = Game::new();
    }

    pub fn is_legal_move(&self, start: Square, end: Square) -> bool {
        is_legal_move(&self.board, self.turn, start, end, self.chain)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.turn, self.chain)
    }

    pub fn is_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    pub fn winner(&self) -> Option<Color> {
        self.is_over().then_some(self.turn.opposite())
    }

    pub fn state(&self) -> GameState {
        match (self.winner(), self.chain) {
            (Some(winner), _) => GameState::Finished(winner),
            (None, Some(square)) => GameState::Chaining(self.turn, square),
            (None, None) => GameState::PlayerMove(self.turn),
        }
    }

    /** Plays the move if it is legal, leaving the game untouched otherwise.
     *
     * A capture keeps the turn with the same piece while it can capture again,
     * unless it was just crowned. */
    pub fn apply_move(&mut self, start: Square, end: Square) -> bool {
        if !self.is_legal_move(start, end) {
            debug!("{} tried illegal move {}", self.turn, Move::new(start, end));
            return false;
        }
        let played = Move::new(start, end);
        let mut piece = self.board.get(start);
        self.board.set(start, PieceKind::Empty);

        let skip = played.is_skip();
        if skip {
            let jumped = self.board.midpoint(start, end);
            debug!("{} captures {} on {}", self.turn, self.board.get(jumped).symbol(), jumped);
            self.board.set(jumped, PieceKind::Empty);
        }

        let crowned = !piece.is_king() && end.point().y == self.turn.crowning_row();
        if crowned {
            piece = piece.crowned();
            debug!("{} crowned on {}", self.turn, end);
        }
        self.board.set(end, piece);

        if skip && !crowned && !candidate_skips(&self.board, end).is_empty() {
            debug!("{} continues capturing from {}", self.turn, end);
            self.chain = Some(end);
        } else {
            self.chain = None;
            self.turn = self.turn.opposite();
        }
        debug!("Played {played}, {} to move", self.turn);
        true
    }

    pub fn apply(&mut self, played: Move) -> bool {
        self.apply_move(played.start, played.end)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
