pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::definitions::{BoardParseError, GameState, Move, Point, Square};
pub use crate::core::engine::{Board, Color, PieceKind};
pub use crate::core::game::Game;
pub use crate::core::logic::{any_capture_available, is_legal_move, is_safe, legal_moves};
pub use crate::core::movegen::{candidate_moves, candidate_skips, is_valid_skip, raw_offsets};
pub use crate::core::player::Player;
