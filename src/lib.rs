//! A move-searching chess engine with personality-weighted evaluation.
//!
//! The crate generates legal moves for an 8×8 mailbox board, scores
//! positions with a tunable heuristic blend (material, piece-square tables,
//! mobility, pawn structure, center control), and searches ahead with
//! bounded-depth alpha-beta minimax. A personality store keeps durable
//! win/loss/draw stats per profile and adapts each profile's heuristic
//! weights from observed outcomes.

pub mod engine;
pub mod errors;
pub mod game_repr;
pub mod personality;

pub use engine::{evaluate, find_best_move};
pub use errors::{EngineError, Result};
pub use game_repr::{Board, Color, Move};
pub use personality::{PersonalityStore, PersonalityWeights};
