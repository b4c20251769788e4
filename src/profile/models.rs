use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    /// Earned the first time a player wins while playing the named board.
    WonderVictory { board: String },
}

/// A persistent player identity. Only raw counters are stored; rates,
/// averages, and the favorite strategy are recomputed on read so they can
/// never drift from the counters they derive from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub top3_finishes: u32,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub highest_score: Option<i32>,
    #[serde(default)]
    pub lowest_score: Option<i32>,
    /// Winning-category label -> times it was this player's best category.
    #[serde(default)]
    pub strategy_counts: HashMap<String, u32>,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl PlayerProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.games_played as f64
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games_played)
    }

    pub fn top3_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.top3_finishes) / f64::from(self.games_played)
    }

    /// The category this player most often wins through, ties broken by
    /// label so the answer is stable.
    pub fn favorite_strategy(&self) -> Option<&str> {
        self.strategy_counts
            .iter()
            .max_by(|(label_a, count_a), (label_b, count_b)| {
                count_a.cmp(count_b).then_with(|| label_b.cmp(label_a))
            })
            .map(|(label, _)| label.as_str())
    }

    pub fn has_badge(&self, badge: &Badge) -> bool {
        self.badges.contains(badge)
    }
}
