use std::{fmt::Display, ops::AddAssign};

use crate::core::definitions::Move;
use crate::core::game::Game;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub all: usize,
    pub captures: usize,
    pub promotions: usize,
    pub chains: usize,
    pub finished: usize,
}

impl PerftResult {
    pub fn combine(self, other: PerftResult) -> Self {
        PerftResult {
            all: self.all + other.all,
            captures: self.captures + other.captures,
            promotions: self.promotions + other.promotions,
            chains: self.chains + other.chains,
            finished: self.finished + other.finished,
        }
    }
}

impl AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - cp: {:<4} pr: {:<4} ch: {:<4} end: {:<4}",
            self.all, self.captures, self.promotions, self.chains, self.finished
        )
    }
}

fn count_leaf(game: &Game, played: Move) -> PerftResult {
    let mut next = game.snapshot();
    let was_king = game.board().get(played.start).is_king();
    next.apply(played);
    PerftResult {
        all: 1,
        captures: played.is_skip() as usize,
        promotions: (!was_king && next.board().get(played.end).is_king()) as usize,
        chains: next.active_chain_square().is_some() as usize,
        finished: next.is_over() as usize,
    }
}

/** Counts move sequences of length `depth`.
 *
 * Every single jump is one ply, so a chain continuation is counted as its own
 * move. Games that end early contribute no leaves. */
pub fn perft(game: &Game, depth: usize) -> PerftResult {
    let possible_moves = game.legal_moves();
    if depth == 0 {
        PerftResult {
            all: 1,
            ..Default::default()
        }
    } else if depth == 1 {
        possible_moves
            .into_iter()
            .map(|played| count_leaf(game, played))
            .fold(PerftResult::default(), PerftResult::combine)
    } else {
        possible_moves
            .into_iter()
            .map(|played| {
                let mut next = game.snapshot();
                next.apply(played);
                if next.is_over() {
                    PerftResult {
                        finished: 1,
                        ..Default::default()
                    }
                } else {
                    perft(&next, depth - 1)
                }
            })
            .fold(PerftResult::default(), PerftResult::combine)
    }
}

pub fn perf_test(game: &Game, depth: usize, expected: usize, detailed: bool) -> bool {
    if detailed && depth > 0 {
        let mut total = PerftResult::default();
        for played in game.legal_moves() {
            let mut next = game.snapshot();
            next.apply(played);
            let result = perft(&next, depth - 1);
            println!(" {played} : {result}");
            total += result;
        }
        println!("+ total: {total}");
        total.all == expected
    } else {
        let result = perft(game, depth);
        #[cfg(test)]
        println!(" details: {result}");
        result.all == expected
    }
}
