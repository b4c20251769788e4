use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::history::GameHistoryEntry;

/// Pre-filter applied to the history before any report runs. `Base` keeps
/// only games with every expansion flag off; a named expansion keeps games
/// where that flag is on, regardless of the other flags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExpansionFilter {
    #[default]
    All,
    Base,
    Leaders,
    Cities,
    Armada,
    Edifice,
}

pub fn filter_history_by_expansion(
    history: &[GameHistoryEntry],
    filter: ExpansionFilter,
) -> Vec<GameHistoryEntry> {
    history
        .iter()
        .filter(|entry| match filter {
            ExpansionFilter::All => true,
            ExpansionFilter::Base => entry.expansions.is_base(),
            ExpansionFilter::Leaders => entry.expansions.leaders,
            ExpansionFilter::Cities => entry.expansions.cities,
            ExpansionFilter::Armada => entry.expansions.armada,
            ExpansionFilter::Edifice => entry.expansions.edifice,
        })
        .cloned()
        .collect()
}

/// Implemented by report rows that know how many players were in their game,
/// so a view can narrow to e.g. four-player games only.
pub trait HasPlayerCount {
    fn player_count(&self) -> usize;
}

pub fn filter_by_player_count<T: HasPlayerCount>(rows: Vec<T>, players: usize) -> Vec<T> {
    rows.into_iter()
        .filter(|row| row.player_count() == players)
        .collect()
}
