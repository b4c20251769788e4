use std::collections::HashMap;

use crate::history::{GameHistoryEntry, WonderAssignment, WonderSide};
use crate::leaderboard::models::{StrategyRow, TallyRow, WonderSideTallyRow};

fn winner_assignment(entry: &GameHistoryEntry) -> Option<&WonderAssignment> {
    let winner = entry.winner.as_deref()?;
    entry.wonders.as_ref()?.get(winner)
}

fn tally_rows(counts: HashMap<String, u32>) -> Vec<TallyRow> {
    let mut rows: Vec<TallyRow> = counts
        .into_iter()
        .map(|(key, count)| TallyRow { key, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    rows
}

/// How often each wonder board carried the recorded winner.
pub fn wonder_wins(history: &[GameHistoryEntry]) -> Vec<TallyRow> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for entry in history {
        if let Some(assignment) = winner_assignment(entry) {
            *counts.entry(assignment.board.clone()).or_default() += 1;
        }
    }
    tally_rows(counts)
}

/// Wonder wins split out by which side of the board was in play.
pub fn wonder_wins_day_night(history: &[GameHistoryEntry]) -> Vec<WonderSideTallyRow> {
    let mut counts: HashMap<(String, WonderSide), u32> = HashMap::new();
    for entry in history {
        if let Some(assignment) = winner_assignment(entry) {
            *counts
                .entry((assignment.board.clone(), assignment.side))
                .or_default() += 1;
        }
    }

    let mut rows: Vec<WonderSideTallyRow> = counts
        .into_iter()
        .map(|((board, side), count)| WonderSideTallyRow { board, side, count })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.board.cmp(&b.board))
            .then_with(|| a.side.to_string().cmp(&b.side.to_string()))
    });
    rows
}

/// Winning shipyards, counted only for games played with the naval
/// expansion.
pub fn shipyard_wins(history: &[GameHistoryEntry]) -> Vec<TallyRow> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for entry in history {
        if !entry.expansions.armada {
            continue;
        }
        if let Some(shipyard) = winner_assignment(entry).and_then(|a| a.shipyard.as_ref()) {
            *counts.entry(shipyard.clone()).or_default() += 1;
        }
    }
    tally_rows(counts)
}

/// How often each edifice project was contributed to, across every
/// participant, win or lose. Games without the edifice module count for
/// nothing even when project data was recorded on them.
pub fn edifice_popularity(history: &[GameHistoryEntry]) -> Vec<TallyRow> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for entry in history {
        if !entry.expansions.edifice {
            continue;
        }
        let Some(projects) = &entry.edifice_projects else {
            continue;
        };
        for contributed in projects.values() {
            for project in contributed {
                *counts.entry(project.clone()).or_default() += 1;
            }
        }
    }
    tally_rows(counts)
}

/// For games that kept a category breakdown, the winner's strongest
/// category, tallied across games. Games with no breakdown for the winner,
/// or where the winner's best category is worth nothing, are skipped.
pub fn winning_strategy_categories(history: &[GameHistoryEntry]) -> Vec<StrategyRow> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for entry in history {
        let Some(winner) = entry.winner.as_deref() else {
            continue;
        };
        let Some(breakdown) = entry
            .category_breakdowns
            .as_ref()
            .and_then(|b| b.get(winner))
        else {
            continue;
        };
        let best = breakdown
            .iter()
            .max_by(|(label_a, value_a), (label_b, value_b)| {
                value_a.cmp(value_b).then_with(|| label_b.cmp(label_a))
            });
        if let Some((label, value)) = best {
            if *value > 0 {
                *counts.entry(label.clone()).or_default() += 1;
            }
        }
    }

    let mut rows: Vec<StrategyRow> = counts
        .into_iter()
        .map(|(category, count)| StrategyRow { category, count })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ExpansionFlags;
    use chrono::Utc;

    fn base_game(id: &str, winner: &str) -> GameHistoryEntry {
        GameHistoryEntry {
            id: id.to_string(),
            played_at: Utc::now(),
            players: vec![winner.to_string()],
            expansions: Default::default(),
            winner: Some(winner.to_string()),
            scores: HashMap::from([(winner.to_string(), 50)]),
            ranks: None,
            wonders: None,
            category_breakdowns: None,
            edifice_projects: None,
            duration_minutes: None,
        }
    }

    fn with_wonder(
        mut entry: GameHistoryEntry,
        player: &str,
        board: &str,
        side: WonderSide,
        shipyard: Option<&str>,
    ) -> GameHistoryEntry {
        let assignment = WonderAssignment {
            board: board.to_string(),
            side,
            shipyard: shipyard.map(str::to_string),
        };
        entry
            .wonders
            .get_or_insert_with(HashMap::new)
            .insert(player.to_string(), assignment);
        entry
    }

    #[test]
    fn wonder_wins_follow_the_recorded_winner() {
        let history = vec![
            with_wonder(base_game("g1", "a"), "a", "Rhodos", WonderSide::Day, None),
            with_wonder(base_game("g2", "b"), "b", "Rhodos", WonderSide::Night, None),
            with_wonder(base_game("g3", "a"), "a", "Gizah", WonderSide::Day, None),
            // No assignment for the winner, so no tally.
            base_game("g4", "c"),
        ];

        let rows = wonder_wins(&history);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].key.as_str(), rows[0].count), ("Rhodos", 2));
        assert_eq!((rows[1].key.as_str(), rows[1].count), ("Gizah", 1));

        let by_side = wonder_wins_day_night(&history);
        assert_eq!(by_side.len(), 3);
        assert!(by_side
            .iter()
            .any(|r| r.board == "Rhodos" && r.side == WonderSide::Night && r.count == 1));
    }

    #[test]
    fn shipyard_wins_require_the_armada_flag() {
        let mut naval = with_wonder(
            base_game("g1", "a"),
            "a",
            "Rhodos",
            WonderSide::Day,
            Some("Siracusa"),
        );
        naval.expansions = ExpansionFlags {
            armada: true,
            ..Default::default()
        };
        // Same assignment, but the game was not played with the expansion.
        let landlocked = with_wonder(
            base_game("g2", "a"),
            "a",
            "Rhodos",
            WonderSide::Day,
            Some("Siracusa"),
        );

        let rows = shipyard_wins(&[naval, landlocked]);
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].key.as_str(), rows[0].count), ("Siracusa", 1));
    }

    #[test]
    fn edifice_popularity_counts_all_contributors_behind_the_flag() {
        let mut on = base_game("g1", "a");
        on.expansions = ExpansionFlags {
            edifice: true,
            ..Default::default()
        };
        on.edifice_projects = Some(HashMap::from([
            ("a".to_string(), vec!["Obelisk".to_string()]),
            (
                "b".to_string(),
                vec!["Obelisk".to_string(), "Aqueduct".to_string()],
            ),
        ]));

        let mut off = base_game("g2", "a");
        off.edifice_projects = Some(HashMap::from([(
            "a".to_string(),
            vec!["Obelisk".to_string()],
        )]));

        let rows = edifice_popularity(&[on, off]);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].key.as_str(), rows[0].count), ("Obelisk", 2));
        assert_eq!((rows[1].key.as_str(), rows[1].count), ("Aqueduct", 1));
    }

    #[test]
    fn strategy_tally_skips_missing_and_worthless_breakdowns() {
        let mut science_win = base_game("g1", "a");
        science_win.category_breakdowns = Some(HashMap::from([(
            "a".to_string(),
            HashMap::from([("science".to_string(), 30), ("military".to_string(), 8)]),
        )]));

        let mut zero_breakdown = base_game("g2", "b");
        zero_breakdown.category_breakdowns = Some(HashMap::from([(
            "b".to_string(),
            HashMap::from([("military".to_string(), 0)]),
        )]));

        let no_breakdown = base_game("g3", "c");

        let rows = winning_strategy_categories(&[science_win, zero_breakdown, no_breakdown]);
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].category.as_str(), rows[0].count), ("science", 1));
    }
}
