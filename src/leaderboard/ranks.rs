use std::collections::HashMap;

use crate::history::GameHistoryEntry;

/// Competition ranking over a game's score map: tied players share a rank
/// and the next distinct score resumes at the count of players already
/// seen plus one ("1,1,3", never "1,1,2").
pub fn derive_ranks(scores: &HashMap<String, i32>) -> HashMap<String, u32> {
    let mut ordered: Vec<(&String, i32)> = scores.iter().map(|(id, s)| (id, *s)).collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut ranks = HashMap::with_capacity(ordered.len());
    let mut current_rank = 0u32;
    let mut previous_score = None;
    for (seen, (player_id, score)) in ordered.into_iter().enumerate() {
        if previous_score != Some(score) {
            current_rank = seen as u32 + 1;
            previous_score = Some(score);
        }
        ranks.insert(player_id.clone(), current_rank);
    }
    ranks
}

/// The entry's finishing ranks: the explicit map captured at scoring time
/// when present, otherwise derived from the score map.
pub fn ranks_for(entry: &GameHistoryEntry) -> HashMap<String, u32> {
    match &entry.ranks {
        Some(ranks) => ranks.clone(),
        None => derive_ranks(&entry.scores),
    }
}
