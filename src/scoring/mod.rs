pub mod engine;
pub mod models;

pub use engine::{add_totals, calculate_total_score, rank_players};
pub use models::{CategoryScore, PlayerScore};
