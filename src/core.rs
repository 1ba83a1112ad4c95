pub mod definitions;
pub mod engine;
pub mod game;
pub mod logic;
pub mod movegen;
pub mod player;
pub mod utils;
