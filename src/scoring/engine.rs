use super::models::{CategoryScore, PlayerScore};

fn category(slot: Option<CategoryScore>) -> i32 {
    slot.map(|c| c.total).unwrap_or_default()
}

/// Sums a player's thirteen category slots into the grand total. Absent
/// slots count as zero, which is what lets the same record shape serve any
/// combination of expansions.
pub fn calculate_total_score(player: &PlayerScore) -> i32 {
    category(player.military)
        + player.treasury.unwrap_or_default()
        + category(player.wonder)
        + player.civilian.unwrap_or_default()
        + player.commercial.unwrap_or_default()
        + category(player.science)
        + category(player.guilds)
        + player.leaders.unwrap_or_default()
        + category(player.cities)
        + category(player.armada)
        + category(player.edifice)
        + category(player.navy)
        + category(player.islands)
}

/// Returns a new list where every record carries its computed `total`.
/// The input is left untouched.
pub fn add_totals(players: &[PlayerScore]) -> Vec<PlayerScore> {
    players
        .iter()
        .map(|player| {
            let mut scored = player.clone();
            scored.total = Some(calculate_total_score(player));
            scored
        })
        .collect()
}

fn effective_total(player: &PlayerScore) -> i32 {
    player.total.unwrap_or_else(|| calculate_total_score(player))
}

/// Orders players into finishing positions: highest total first, ties
/// broken by treasury points (most coins), then by seat index (the earlier
/// seat wins). The tabletop rulebook stops there, so two records equal on
/// all three keys keep their input order.
pub fn rank_players(players: &[PlayerScore]) -> Vec<PlayerScore> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| {
        effective_total(b)
            .cmp(&effective_total(a))
            .then_with(|| {
                b.treasury
                    .unwrap_or_default()
                    .cmp(&a.treasury.unwrap_or_default())
            })
            .then_with(|| a.position.cmp(&b.position))
    });
    ranked
}
