pub mod filters;
pub mod models;
pub mod ranks;
pub mod reports;

pub use filters::{filter_by_player_count, filter_history_by_expansion, ExpansionFilter, HasPlayerCount};
pub use models::*;
pub use ranks::{derive_ranks, ranks_for};
pub use reports::boards::{
    edifice_popularity, shipyard_wins, winning_strategy_categories, wonder_wins,
    wonder_wins_day_night,
};
pub use reports::scores::{biggest_win_margins, personal_bests, top_scores, top_scores_grouped_by_game};
pub use reports::standings::{
    best_averages, consistency_floors, games_played, most_wins, top3_rates, win_rates,
};

use std::collections::HashMap;

/// Display-name snapshot handed in by the caller: player id -> name.
pub type ProfileNames = HashMap<String, String>;

/// Resolves a player id to a display name, falling back to the raw id when
/// the lookup has no entry for it.
pub(crate) fn display_name(profiles: &ProfileNames, player_id: &str) -> String {
    profiles
        .get(player_id)
        .cloned()
        .unwrap_or_else(|| player_id.to_string())
}
