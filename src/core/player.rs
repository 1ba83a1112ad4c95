use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::definitions::Move;
use crate::core::game::Game;
use crate::core::logic::is_safe;

/** Who sits on one side of the board. */
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Player {
    /** moves come from the user interface */
    #[default]
    Human,
    /** picks a random move, preferring ones that keep the moved piece safe */
    Automated,
}

impl Player {
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    pub fn propose_move(&self, game: &Game) -> Option<Move> {
        self.propose_move_with(game, &mut rand::thread_rng())
    }

    pub fn propose_move_with<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Move> {
        match self {
            Player::Human => None,
            Player::Automated => {
                let moves = game.legal_moves();
                let safe: Vec<Move> = moves
                    .iter()
                    .copied()
                    .filter(|&candidate| lands_safely(game, candidate))
                    .collect();
                safe.choose(rng).or_else(|| moves.choose(rng)).copied()
            }
        }
    }
}

fn lands_safely(game: &Game, candidate: Move) -> bool {
    let mut trial = game.snapshot();
    trial.apply(candidate) && is_safe(trial.board(), candidate.end)
}
