use std::{env, fs};

use anyhow::{bail, Context};
use checkers_engine::{
    utils::{perf_test, perft},
    Board, Color, Game,
};
use log::info;

const USAGE: &str = "usage: perft-debug <depth> [expected] [diagram-file] [--detailed]";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let detailed = args.iter().any(|arg| arg == "--detailed");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let depth: usize = positional
        .next()
        .context(USAGE)?
        .parse::<usize>()
        .context("depth must be a non-negative number")?;
    let expected: Option<usize> = positional
        .next()
        .map(|value| value.parse::<usize>().context("expected must be a non-negative number"))
        .transpose()?;
    let game = match positional.next() {
        Some(path) => {
            let diagram =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            let board = Board::from_diagram(&diagram)
                .with_context(|| format!("failed to parse board diagram {path}"))?;
            Game::with_board(board, Color::Black)
        }
        None => Game::new(),
    };
    info!("Running perft to depth {depth}");
    print!("{}", game.board());

    match expected {
        Some(expected) => {
            if !perf_test(&game, depth, expected, detailed) {
                bail!("node count differs from expected {expected}");
            }
            println!("ok: {expected} nodes");
        }
        None => println!("{}", perft(&game, depth)),
    }
    Ok(())
}
