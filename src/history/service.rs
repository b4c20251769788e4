use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::profile::ProfileRepository;
use crate::scoring::{add_totals, rank_players, PlayerScore};

use super::{
    models::{ExpansionFlags, GameHistoryEntry, WonderAssignment},
    repository::HistoryRepository,
    HistoryError,
};

/// Table-level facts about a game being finalized, alongside the per-player
/// score records.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    pub expansions: ExpansionFlags,
    pub wonders: Option<HashMap<String, WonderAssignment>>,
    pub edifice_projects: Option<HashMap<String, Vec<String>>>,
    pub duration_minutes: Option<u32>,
}

/// Turns finished score sheets into immutable history entries: totals and
/// finishing order via the aggregation engine, then the entry is recorded
/// and every participant's profile is brought up to date.
pub struct GameRecorder {
    history: Arc<dyn HistoryRepository>,
    profiles: Option<Arc<dyn ProfileRepository>>,
}

impl GameRecorder {
    pub fn builder(history: Arc<dyn HistoryRepository>) -> GameRecorderBuilder {
        GameRecorderBuilder {
            history,
            profiles: None,
        }
    }

    pub async fn finalize_game(
        &self,
        setup: GameSetup,
        players: Vec<PlayerScore>,
    ) -> Result<GameHistoryEntry, HistoryError> {
        if players.is_empty() {
            return Err(HistoryError::Validation(
                "finalizing a game requires at least one player".to_string(),
            ));
        }

        let ranked = rank_players(&add_totals(&players));
        let winner = ranked[0].player_id.clone();

        let mut seating = ranked.clone();
        seating.sort_by_key(|p| p.position);

        let scores: HashMap<String, i32> = ranked
            .iter()
            .map(|p| (p.player_id.clone(), p.total.unwrap_or_default()))
            .collect();
        let ranks: HashMap<String, u32> = ranked
            .iter()
            .enumerate()
            .map(|(index, p)| (p.player_id.clone(), index as u32 + 1))
            .collect();
        let category_breakdowns: HashMap<String, HashMap<String, i32>> = ranked
            .iter()
            .map(|p| (p.player_id.clone(), p.category_breakdown()))
            .collect();

        let entry = GameHistoryEntry {
            id: Uuid::new_v4().to_string(),
            played_at: Utc::now(),
            players: seating.into_iter().map(|p| p.player_id).collect(),
            expansions: setup.expansions,
            winner: Some(winner.clone()),
            scores,
            ranks: Some(ranks),
            wonders: setup.wonders,
            category_breakdowns: Some(category_breakdowns),
            edifice_projects: setup.edifice_projects,
            duration_minutes: setup.duration_minutes,
        };

        self.history.record_game(entry.clone()).await?;

        if let Some(profiles) = &self.profiles {
            for player in &players {
                if let Some(name) = &player.name {
                    profiles.upsert_name(&player.player_id, name).await?;
                }
            }
            profiles.apply_game(&entry).await?;
        }

        tracing::info!(
            game_id = %entry.id,
            winner = %winner,
            players = entry.players.len(),
            "Recorded completed game"
        );

        Ok(entry)
    }
}

pub struct GameRecorderBuilder {
    history: Arc<dyn HistoryRepository>,
    profiles: Option<Arc<dyn ProfileRepository>>,
}

impl GameRecorderBuilder {
    pub fn with_profiles(mut self, profiles: Arc<dyn ProfileRepository>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn build(self) -> GameRecorder {
        GameRecorder {
            history: self.history,
            profiles: self.profiles,
        }
    }
}
