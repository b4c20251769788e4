// Library crate for the 7 Wonders score keeper core
// This file exposes the public API for integration tests

pub mod history;
pub mod leaderboard;
pub mod profile;
pub mod scoring;

// Re-export commonly used types for easier access in tests
pub use history::{
    ExpansionFlags, GameHistoryEntry, GameRecorder, GameSetup, HistoryError, HistoryRepository,
    InMemoryHistoryRepository, WonderAssignment, WonderSide,
};
pub use leaderboard::{ExpansionFilter, ProfileNames};
pub use profile::{Badge, InMemoryProfileRepository, PlayerProfile, ProfileRepository};
pub use scoring::{add_totals, calculate_total_score, rank_players, CategoryScore, PlayerScore};
