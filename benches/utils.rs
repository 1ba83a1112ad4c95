use checkers_engine::{
    any_capture_available, candidate_moves, candidate_skips, is_legal_move, is_safe,
    utils::perft, Board, Color, Game, Move, Square,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDGAME: &str = "
    .b.b.b.b
    b.b.b...
    ...b.b.b
    ..w.....
    .b...w..
    w.w...w.
    .w.w.w.w
    w...w.w.
";

fn generation_count(board: &Board) -> usize {
    board
        .iter_pieces()
        .map(|(square, _)| {
            candidate_moves(board, square).len() + candidate_skips(board, square).len()
        })
        .sum()
}

fn safety_count(board: &Board) -> usize {
    board
        .iter_pieces()
        .filter(|&(square, _)| is_safe(board, square))
        .count()
}

fn brute_force_legal(board: &Board, side: Color) -> usize {
    let mut result = 0;
    for start in 0..64 {
        for end in 0..64 {
            if is_legal_move(board, side, Square::new(start), Square::new(end), None) {
                result += 1;
            }
        }
    }
    result
}

fn utils_benchmark(c: &mut Criterion) {
    let opening = Board::default();
    let midgame = Board::from_diagram(MIDGAME).expect("benchmark diagram is valid");
    c.bench_function("generation opening", |b| {
        b.iter(|| generation_count(black_box(&opening)))
    });
    c.bench_function("generation midgame", |b| {
        b.iter(|| generation_count(black_box(&midgame)))
    });
    c.bench_function("capture scan midgame", |b| {
        b.iter(|| any_capture_available(black_box(&midgame), Color::Black))
    });
    c.bench_function("safety midgame", |b| {
        b.iter(|| safety_count(black_box(&midgame)))
    });
    c.bench_function("legal brute force opening", |b| {
        b.iter(|| brute_force_legal(black_box(&opening), Color::Black))
    });
    c.bench_function("apply on snapshot", |b| {
        let game = Game::new();
        let played = Move::between((1, 2), (0, 3));
        b.iter(|| {
            let mut next = black_box(&game).snapshot();
            next.apply(played)
        })
    });
}

fn perft_benchmark(c: &mut Criterion) {
    for depth in [3, 5] {
        c.bench_function(&format!("perft opening depth {depth}"), |b| {
            b.iter(|| perft(black_box(&Game::new()), depth))
        });
    }
}

criterion_group!(benches, utils_benchmark, perft_benchmark);
criterion_main!(benches);
