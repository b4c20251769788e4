use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{models::GameHistoryEntry, HistoryError};

pub const DEFAULT_RETENTION: usize = 100;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn record_game(&self, entry: GameHistoryEntry) -> Result<(), HistoryError>;
    /// Full history, oldest first.
    async fn all_games(&self) -> Result<Vec<GameHistoryEntry>, HistoryError>;
    async fn game_count(&self) -> Result<usize, HistoryError>;
    async fn clear(&self) -> Result<(), HistoryError>;
}

/// Append-only in-memory history with a retention cap: once the cap is
/// reached, appending evicts the oldest entry.
#[derive(Debug)]
pub struct InMemoryHistoryRepository {
    games: Arc<RwLock<Vec<GameHistoryEntry>>>,
    retention: usize,
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }

    pub fn with_retention(retention: usize) -> Self {
        Self {
            games: Arc::new(RwLock::new(Vec::new())),
            retention: retention.max(1),
        }
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn record_game(&self, entry: GameHistoryEntry) -> Result<(), HistoryError> {
        let mut games = self.games.write().await;
        games.push(entry);
        while games.len() > self.retention {
            games.remove(0);
        }
        Ok(())
    }

    async fn all_games(&self) -> Result<Vec<GameHistoryEntry>, HistoryError> {
        let games = self.games.read().await;
        Ok(games.clone())
    }

    async fn game_count(&self) -> Result<usize, HistoryError> {
        let games = self.games.read().await;
        Ok(games.len())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let mut games = self.games.write().await;
        games.clear();
        Ok(())
    }
}
