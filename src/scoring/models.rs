use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A fully resolved subtotal for one scoring category. Category-specific
/// math (science symbol sets, conflict token values, coins divided by
/// three) happens before this is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub total: i32,
}

impl CategoryScore {
    pub fn new(total: i32) -> Self {
        Self { total }
    }
}

impl From<i32> for CategoryScore {
    fn from(total: i32) -> Self {
        Self { total }
    }
}

/// One player's tally for a single game. Every category slot is optional:
/// which slots are present depends on which expansions were in play, and an
/// absent slot counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 0-based seat index, clockwise from the starting player.
    #[serde(default)]
    pub position: usize,
    #[serde(default)]
    pub military: Option<CategoryScore>,
    #[serde(default)]
    pub treasury: Option<i32>,
    #[serde(default)]
    pub wonder: Option<CategoryScore>,
    #[serde(default)]
    pub civilian: Option<i32>,
    #[serde(default)]
    pub commercial: Option<i32>,
    #[serde(default)]
    pub science: Option<CategoryScore>,
    #[serde(default)]
    pub guilds: Option<CategoryScore>,
    #[serde(default)]
    pub leaders: Option<i32>,
    #[serde(default)]
    pub cities: Option<CategoryScore>,
    #[serde(default)]
    pub armada: Option<CategoryScore>,
    #[serde(default)]
    pub navy: Option<CategoryScore>,
    #[serde(default)]
    pub islands: Option<CategoryScore>,
    #[serde(default)]
    pub edifice: Option<CategoryScore>,
    /// Cached grand total. Set by `add_totals`; readers fall back to
    /// recomputation when absent.
    #[serde(default)]
    pub total: Option<i32>,
}

impl PlayerScore {
    pub fn new(player_id: impl Into<String>, position: usize) -> Self {
        Self {
            player_id: player_id.into(),
            position,
            ..Self::default()
        }
    }

    /// The present category slots as a label -> points map, used for the
    /// per-game breakdown kept on history entries. Absent slots are left
    /// out rather than recorded as zero.
    pub fn category_breakdown(&self) -> HashMap<String, i32> {
        let mut breakdown = HashMap::new();
        let mut put = |label: &str, value: Option<i32>| {
            if let Some(points) = value {
                breakdown.insert(label.to_string(), points);
            }
        };
        put("military", self.military.map(|c| c.total));
        put("treasury", self.treasury);
        put("wonder", self.wonder.map(|c| c.total));
        put("civilian", self.civilian);
        put("commercial", self.commercial);
        put("science", self.science.map(|c| c.total));
        put("guilds", self.guilds.map(|c| c.total));
        put("leaders", self.leaders);
        put("cities", self.cities.map(|c| c.total));
        put("armada", self.armada.map(|c| c.total));
        put("navy", self.navy.map(|c| c.total));
        put("islands", self.islands.map(|c| c.total));
        put("edifice", self.edifice.map(|c| c.total));
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_carries_only_present_slots() {
        let mut p = PlayerScore::new("alice", 0);
        p.science = Some(CategoryScore::new(18));
        p.treasury = Some(4);

        let breakdown = p.category_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown["science"], 18);
        assert_eq!(breakdown["treasury"], 4);
        assert!(!breakdown.contains_key("military"));
    }
}
