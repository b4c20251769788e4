use std::collections::HashMap;

use chrono::{TimeZone, Utc};

use wonderscore::{
    ExpansionFlags, GameHistoryEntry, ProfileNames, WonderAssignment, WonderSide,
};

// ============================================================================
// History Entry Builder
// ============================================================================

pub struct EntryBuilder {
    entry: GameHistoryEntry,
}

impl EntryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            entry: GameHistoryEntry {
                id: id.to_string(),
                played_at: Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap(),
                players: vec![],
                expansions: ExpansionFlags::default(),
                winner: None,
                scores: HashMap::new(),
                ranks: None,
                wonders: None,
                category_breakdowns: None,
                edifice_projects: None,
                duration_minutes: None,
            },
        }
    }

    pub fn scores(mut self, scores: &[(&str, i32)]) -> Self {
        self.entry.players = scores.iter().map(|(p, _)| p.to_string()).collect();
        self.entry.scores = scores.iter().map(|(p, s)| (p.to_string(), *s)).collect();
        self
    }

    pub fn winner(mut self, player_id: &str) -> Self {
        self.entry.winner = Some(player_id.to_string());
        self
    }

    pub fn expansions(mut self, expansions: ExpansionFlags) -> Self {
        self.entry.expansions = expansions;
        self
    }

    pub fn wonder(mut self, player_id: &str, board: &str, side: WonderSide) -> Self {
        self.entry
            .wonders
            .get_or_insert_with(HashMap::new)
            .insert(
                player_id.to_string(),
                WonderAssignment {
                    board: board.to_string(),
                    side,
                    shipyard: None,
                },
            );
        self
    }

    pub fn shipyard(mut self, player_id: &str, shipyard: &str) -> Self {
        if let Some(assignment) = self
            .entry
            .wonders
            .get_or_insert_with(HashMap::new)
            .get_mut(player_id)
        {
            assignment.shipyard = Some(shipyard.to_string());
        }
        self
    }

    pub fn breakdown(mut self, player_id: &str, categories: &[(&str, i32)]) -> Self {
        self.entry
            .category_breakdowns
            .get_or_insert_with(HashMap::new)
            .insert(
                player_id.to_string(),
                categories
                    .iter()
                    .map(|(label, value)| (label.to_string(), *value))
                    .collect(),
            );
        self
    }

    pub fn edifice_contributions(mut self, player_id: &str, projects: &[&str]) -> Self {
        self.entry
            .edifice_projects
            .get_or_insert_with(HashMap::new)
            .insert(
                player_id.to_string(),
                projects.iter().map(|p| p.to_string()).collect(),
            );
        self
    }

    pub fn build(self) -> GameHistoryEntry {
        self.entry
    }
}

pub fn named_profiles(names: &[(&str, &str)]) -> ProfileNames {
    names
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
