use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::history::{GameHistoryEntry, HistoryError};
use crate::leaderboard::ranks_for;

use super::models::{Badge, PlayerProfile};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Creates the profile if it does not exist; refreshes the display name
    /// if it does.
    async fn upsert_name(&self, player_id: &str, name: &str) -> Result<(), HistoryError>;
    async fn get(&self, player_id: &str) -> Result<Option<PlayerProfile>, HistoryError>;
    async fn all(&self) -> Result<Vec<PlayerProfile>, HistoryError>;
    /// Folds one finalized game into every participant's running counters.
    async fn apply_game(&self, entry: &GameHistoryEntry) -> Result<(), HistoryError>;
    /// Display-name snapshot for leaderboard rendering.
    async fn profile_names(&self) -> Result<HashMap<String, String>, HistoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, PlayerProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn fold_game(profile: &mut PlayerProfile, entry: &GameHistoryEntry, ranks: &HashMap<String, u32>) {
    let Some(score) = entry.scores.get(&profile.id).copied() else {
        return;
    };

    profile.games_played += 1;
    profile.total_score += i64::from(score);
    profile.highest_score = Some(profile.highest_score.map_or(score, |h| h.max(score)));
    profile.lowest_score = Some(profile.lowest_score.map_or(score, |l| l.min(score)));

    let rank = ranks.get(&profile.id).copied();
    if rank == Some(1) {
        profile.wins += 1;
        let board = entry
            .wonders
            .as_ref()
            .and_then(|w| w.get(&profile.id))
            .map(|a| a.board.clone());
        if let Some(board) = board {
            let badge = Badge::WonderVictory { board };
            if !profile.has_badge(&badge) {
                profile.badges.push(badge);
            }
        }
    }
    if matches!(rank, Some(r) if r <= 3) {
        profile.top3_finishes += 1;
    }

    let best_category = entry
        .category_breakdowns
        .as_ref()
        .and_then(|b| b.get(&profile.id))
        .and_then(|breakdown| {
            breakdown
                .iter()
                .max_by(|(label_a, value_a), (label_b, value_b)| {
                    value_a.cmp(value_b).then_with(|| label_b.cmp(label_a))
                })
        });
    if let Some((label, value)) = best_category {
        if *value > 0 {
            *profile.strategy_counts.entry(label.clone()).or_default() += 1;
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn upsert_name(&self, player_id: &str, name: &str) -> Result<(), HistoryError> {
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(player_id.to_string())
            .and_modify(|profile| profile.name = name.to_string())
            .or_insert_with(|| PlayerProfile::new(player_id, name));
        Ok(())
    }

    async fn get(&self, player_id: &str) -> Result<Option<PlayerProfile>, HistoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(player_id).cloned())
    }

    async fn all(&self) -> Result<Vec<PlayerProfile>, HistoryError> {
        let profiles = self.profiles.read().await;
        let mut all: Vec<PlayerProfile> = profiles.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn apply_game(&self, entry: &GameHistoryEntry) -> Result<(), HistoryError> {
        let ranks = ranks_for(entry);
        let mut profiles = self.profiles.write().await;
        for player_id in entry.scores.keys() {
            let profile = profiles
                .entry(player_id.clone())
                .or_insert_with(|| PlayerProfile::new(player_id.clone(), player_id.clone()));
            fold_game(profile, entry, &ranks);
        }
        Ok(())
    }

    async fn profile_names(&self) -> Result<HashMap<String, String>, HistoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .map(|p| (p.id.clone(), p.name.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{WonderAssignment, WonderSide};
    use chrono::Utc;

    fn entry(id: &str, scores: &[(&str, i32)]) -> GameHistoryEntry {
        GameHistoryEntry {
            id: id.to_string(),
            played_at: Utc::now(),
            players: scores.iter().map(|(p, _)| p.to_string()).collect(),
            expansions: Default::default(),
            winner: None,
            scores: scores
                .iter()
                .map(|(p, s)| (p.to_string(), *s))
                .collect(),
            ranks: None,
            wonders: None,
            category_breakdowns: None,
            edifice_projects: None,
            duration_minutes: None,
        }
    }

    #[tokio::test]
    async fn apply_game_updates_counters_and_extremes() {
        let repo = InMemoryProfileRepository::new();
        repo.upsert_name("alice", "Alice").await.unwrap();

        repo.apply_game(&entry("g1", &[("alice", 52), ("bob", 44)]))
            .await
            .unwrap();
        repo.apply_game(&entry("g2", &[("alice", 47), ("bob", 58)]))
            .await
            .unwrap();

        let alice = repo.get("alice").await.unwrap().unwrap();
        assert_eq!(alice.games_played, 2);
        assert_eq!(alice.wins, 1);
        assert_eq!(alice.top3_finishes, 2);
        assert_eq!(alice.highest_score, Some(52));
        assert_eq!(alice.lowest_score, Some(47));
        assert_eq!(alice.win_rate(), 0.5);
        assert_eq!(alice.average_score(), 49.5);

        // Unknown participants get a profile named after their id.
        let bob = repo.get("bob").await.unwrap().unwrap();
        assert_eq!(bob.name, "bob");
        assert_eq!(bob.wins, 1);
    }

    #[tokio::test]
    async fn winning_with_a_board_earns_the_badge_once() {
        let repo = InMemoryProfileRepository::new();

        let mut game = entry("g1", &[("alice", 60), ("bob", 40)]);
        game.wonders = Some(HashMap::from([(
            "alice".to_string(),
            WonderAssignment {
                board: "Halikarnassos".to_string(),
                side: WonderSide::Night,
                shipyard: None,
            },
        )]));

        repo.apply_game(&game).await.unwrap();
        let mut repeat = game.clone();
        repeat.id = "g2".to_string();
        repo.apply_game(&repeat).await.unwrap();

        let alice = repo.get("alice").await.unwrap().unwrap();
        assert_eq!(alice.badges.len(), 1);
        assert!(alice.has_badge(&Badge::WonderVictory {
            board: "Halikarnassos".to_string()
        }));
    }

    #[tokio::test]
    async fn strategy_counts_follow_each_players_best_category() {
        let repo = InMemoryProfileRepository::new();

        let mut game = entry("g1", &[("alice", 60), ("bob", 40)]);
        game.category_breakdowns = Some(HashMap::from([
            (
                "alice".to_string(),
                HashMap::from([("science".to_string(), 31), ("military".to_string(), 6)]),
            ),
            (
                "bob".to_string(),
                HashMap::from([("civilian".to_string(), 22)]),
            ),
        ]));
        repo.apply_game(&game).await.unwrap();

        let alice = repo.get("alice").await.unwrap().unwrap();
        assert_eq!(alice.favorite_strategy(), Some("science"));
        let bob = repo.get("bob").await.unwrap().unwrap();
        assert_eq!(bob.favorite_strategy(), Some("civilian"));
    }

    #[tokio::test]
    async fn name_snapshot_covers_every_profile() {
        let repo = InMemoryProfileRepository::new();
        repo.upsert_name("alice", "Alice").await.unwrap();
        repo.upsert_name("bob", "Bob").await.unwrap();

        let names = repo.profile_names().await.unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names["alice"], "Alice");
    }

    #[tokio::test]
    async fn all_lists_profiles_sorted_by_name() {
        let repo = InMemoryProfileRepository::new();
        repo.upsert_name("p2", "Bea").await.unwrap();
        repo.upsert_name("p1", "Ada").await.unwrap();
        repo.upsert_name("p3", "Ada").await.unwrap();

        let roster = repo.all().await.unwrap();
        let order: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        // Name ascending, ids settling the shared name.
        assert_eq!(order, vec!["p1", "p3", "p2"]);
    }
}
