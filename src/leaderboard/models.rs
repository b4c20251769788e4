use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::WonderSide;

use super::filters::HasPlayerCount;

/// One (game, player) score for the top-score views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub player_id: String,
    pub name: String,
    pub score: i32,
    pub game_id: String,
    pub player_count: usize,
    pub played_at: DateTime<Utc>,
}

impl HasPlayerCount for ScoreRow {
    fn player_count(&self) -> usize {
        self.player_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCountRow {
    pub player_id: String,
    pub name: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRow {
    pub player_id: String,
    pub name: String,
    /// Mean score rounded to one decimal place.
    pub average: f64,
    pub games: u32,
}

/// Winning margin of one game, attributed to its top scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRow {
    pub player_id: String,
    pub name: String,
    pub margin: i32,
    pub game_id: String,
    pub player_count: usize,
}

impl HasPlayerCount for MarginRow {
    fn player_count(&self) -> usize {
        self.player_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRow {
    pub player_id: String,
    pub name: String,
    pub best: i32,
    pub game_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesPlayedRow {
    pub player_id: String,
    pub name: String,
    pub games: u32,
}

/// Win-rate or top-3-rate style row: `hits` out of `games`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub player_id: String,
    pub name: String,
    pub rate: f64,
    pub hits: u32,
    pub games: u32,
}

/// A player's lowest recorded score; a higher floor reads as steadier play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRow {
    pub player_id: String,
    pub name: String,
    pub floor: i32,
    pub games: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRow {
    pub key: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderSideTallyRow {
    pub board: String,
    pub side: WonderSide,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRow {
    pub category: String,
    pub count: u32,
}
