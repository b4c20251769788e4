use std::collections::HashMap;

use crate::history::GameHistoryEntry;
use crate::leaderboard::models::{BestScoreRow, MarginRow, ScoreRow};
use crate::leaderboard::{display_name, ProfileNames};

fn score_rows(history: &[GameHistoryEntry], profiles: &ProfileNames) -> Vec<ScoreRow> {
    history
        .iter()
        .flat_map(|entry| {
            entry.scores.iter().map(|(player_id, score)| ScoreRow {
                player_id: player_id.clone(),
                name: display_name(profiles, player_id),
                score: *score,
                game_id: entry.id.clone(),
                player_count: entry.player_count(),
                played_at: entry.played_at,
            })
        })
        .collect()
}

/// Every (game, player) score, best first.
pub fn top_scores(history: &[GameHistoryEntry], profiles: &ProfileNames) -> Vec<ScoreRow> {
    let mut rows = score_rows(history, profiles);
    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.game_id.cmp(&b.game_id))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// The same rows arranged game by game, best score first within each game.
pub fn top_scores_grouped_by_game(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
) -> Vec<ScoreRow> {
    let mut rows = score_rows(history, profiles);
    rows.sort_by(|a, b| {
        a.game_id
            .cmp(&b.game_id)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// Per game with at least two scoring players, the gap between the top two
/// scores, credited to the top scorer.
pub fn biggest_win_margins(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
) -> Vec<MarginRow> {
    let mut rows: Vec<MarginRow> = history
        .iter()
        .filter_map(|entry| {
            let mut ordered: Vec<(&String, i32)> =
                entry.scores.iter().map(|(id, s)| (id, *s)).collect();
            if ordered.len() < 2 {
                return None;
            }
            ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            let (top_id, top_score) = ordered[0];
            let (_, runner_up) = ordered[1];
            Some(MarginRow {
                player_id: top_id.clone(),
                name: display_name(profiles, top_id),
                margin: top_score - runner_up,
                game_id: entry.id.clone(),
                player_count: entry.player_count(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.margin
            .cmp(&a.margin)
            .then_with(|| a.game_id.cmp(&b.game_id))
    });
    rows
}

/// Each player's single highest score and the game it happened in. When the
/// same best shows up twice, the earlier game keeps the credit.
pub fn personal_bests(
    history: &[GameHistoryEntry],
    profiles: &ProfileNames,
) -> Vec<BestScoreRow> {
    let mut bests: HashMap<&str, (i32, &str)> = HashMap::new();
    for entry in history {
        for (player_id, score) in &entry.scores {
            match bests.get(player_id.as_str()) {
                Some((best, _)) if *best >= *score => {}
                _ => {
                    bests.insert(player_id, (*score, &entry.id));
                }
            }
        }
    }

    let mut rows: Vec<BestScoreRow> = bests
        .into_iter()
        .map(|(player_id, (best, game_id))| BestScoreRow {
            player_id: player_id.to_string(),
            name: display_name(profiles, player_id),
            best,
            game_id: game_id.to_string(),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.best
            .cmp(&a.best)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}
