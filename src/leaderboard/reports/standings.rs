use std::collections::HashMap;

use crate::history::GameHistoryEntry;
use crate::leaderboard::models::{AverageRow, FloorRow, GamesPlayedRow, RateRow, WinCountRow};
use crate::leaderboard::ranks::ranks_for;
use crate::leaderboard::{display_name, ProfileNames};

use super::round_to_tenth;

/// Win counts keyed on the winner recorded at finalization time. Players
/// who never won a game do not appear.
pub fn most_wins(history: &[GameHistoryEntry], profiles: &ProfileNames) -> Vec<WinCountRow> {
    let mut wins: HashMap<&str, u32> = HashMap::new();
    for entry in history {
        if let Some(winner) = &entry.winner {
            *wins.entry(winner).or_default() += 1;
        }
    }

    let mut rows: Vec<WinCountRow> = wins
        .into_iter()
        .map(|(player_id, wins)| WinCountRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            wins,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// How many games each participant shows up in.
pub fn games_played(history: &[GameHistoryEntry], profiles: &ProfileNames) -> Vec<GamesPlayedRow> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for entry in history {
        for player_id in entry.scores.keys() {
            *counts.entry(player_id).or_default() += 1;
        }
    }

    let mut rows: Vec<GamesPlayedRow> = counts
        .into_iter()
        .map(|(player_id, games)| GamesPlayedRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            games,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.games
            .cmp(&a.games)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// Mean score per player, rounded to one decimal, for players with at least
/// `min_games` recorded games.
pub fn best_averages(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
    min_games: u32,
) -> Vec<AverageRow> {
    let mut totals: HashMap<&str, (i64, u32)> = HashMap::new();
    for entry in history {
        for (player_id, score) in &entry.scores {
            let slot = totals.entry(player_id).or_default();
            slot.0 += i64::from(*score);
            slot.1 += 1;
        }
    }

    let mut rows: Vec<AverageRow> = totals
        .into_iter()
        .filter(|(_, (_, games))| *games >= min_games)
        .map(|(player_id, (total, games))| AverageRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            average: round_to_tenth(total as f64 / f64::from(games)),
            games,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.games.cmp(&a.games))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

fn rate_rows<F>(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
    min_games: u32,
    mut is_hit: F,
) -> Vec<RateRow>
where
    F: FnMut(u32) -> bool,
{
    let mut tallies: HashMap<&str, (u32, u32)> = HashMap::new();
    for entry in history {
        let ranks = ranks_for(entry);
        for player_id in entry.scores.keys() {
            let slot = tallies.entry(player_id).or_default();
            slot.1 += 1;
            if ranks.get(player_id).copied().map(&mut is_hit).unwrap_or(false) {
                slot.0 += 1;
            }
        }
    }

    let mut rows: Vec<RateRow> = tallies
        .into_iter()
        .filter(|(_, (_, games))| *games >= min_games)
        .map(|(player_id, (hits, games))| RateRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            rate: f64::from(hits) / f64::from(games),
            hits,
            games,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.rate
            .partial_cmp(&a.rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.games.cmp(&a.games))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// Share of games finished at rank 1 per the finishing ranks. With a tied
/// top score every rank-1 player is credited with a win for that game.
pub fn win_rates(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
    min_games: u32,
) -> Vec<RateRow> {
    rate_rows(history, profiles, min_games, |rank| rank == 1)
}

/// Share of games finished on the podium (rank 3 or better).
pub fn top3_rates(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
    min_games: u32,
) -> Vec<RateRow> {
    rate_rows(history, profiles, min_games, |rank| rank <= 3)
}

/// Each player's lowest recorded score. A high floor marks a player who
/// rarely has a bad night.
pub fn consistency_floors(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
    min_games: u32,
) -> Vec<FloorRow> {
    let mut floors: HashMap<&str, (i32, u32)> = HashMap::new();
    for entry in history {
        for (player_id, score) in &entry.scores {
            floors
                .entry(player_id)
                .and_modify(|(floor, games)| {
                    *floor = (*floor).min(*score);
                    *games += 1;
                })
                .or_insert((*score, 1));
        }
    }

    let mut rows: Vec<FloorRow> = floors
        .into_iter()
        .filter(|(_, (_, games))| *games >= min_games)
        .map(|(player_id, (floor, games))| FloorRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            floor,
            games,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.floor
            .cmp(&a.floor)
            .then_with(|| b.games.cmp(&a.games))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}
