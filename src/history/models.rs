use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which optional game modules were in play. The four flags are
/// independent; any subset may be active at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionFlags {
    #[serde(default)]
    pub leaders: bool,
    #[serde(default)]
    pub cities: bool,
    #[serde(default)]
    pub armada: bool,
    #[serde(default)]
    pub edifice: bool,
}

impl ExpansionFlags {
    /// True when no expansion module is active.
    pub fn is_base(&self) -> bool {
        !(self.leaders || self.cities || self.armada || self.edifice)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WonderSide {
    Day,
    Night,
}

/// A player's board for one game: which wonder, which side, and (with the
/// naval expansion) which shipyard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderAssignment {
    pub board: String,
    pub side: WonderSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipyard: Option<String>,
}

/// One completed game's permanent record. Written once at game completion
/// and treated as a read-only snapshot from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHistoryEntry {
    pub id: String,
    pub played_at: DateTime<Utc>,
    /// Participating player ids in seating order.
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub expansions: ExpansionFlags,
    /// Winner recorded at finalization time. May drift from `scores` after a
    /// manual correction; rank-sensitive reports re-derive instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Player id -> final grand total.
    #[serde(default)]
    pub scores: HashMap<String, i32>,
    /// Explicit finishing ranks captured at scoring time, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranks: Option<HashMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wonders: Option<HashMap<String, WonderAssignment>>,
    /// Player id -> category label -> points, when the per-category
    /// breakdown was kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_breakdowns: Option<HashMap<String, HashMap<String, i32>>>,
    /// Player id -> contributed edifice project ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edifice_projects: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl GameHistoryEntry {
    /// Number of players who put a score on the board.
    pub fn player_count(&self) -> usize {
        self.scores.len()
    }
}
