pub mod evaluation;
pub mod piece_square_tables;
pub mod search;

pub use evaluation::{evaluate, evaluate_with_breakdown, EvalBreakdown};
pub use search::find_best_move;
