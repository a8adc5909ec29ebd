use crate::games::models::PlayerEntry;

/// Recomputes `total` for every entry as the sum of its six scoring
/// components. Idempotent; safe to call after every field edit.
pub fn derive_totals(players: &mut [PlayerEntry]) {
    for player in players.iter_mut() {
        player.total = player.component_sum();
    }
}

/// Assigns dense ranks 1..=N by `total` descending.
///
/// Ties are broken by position in the input list: the entry entered first
/// gets the better rank. This is the group's agreed tie-break and relies
/// on the sort being stable, so it is asserted by tests rather than left
/// as an accident of the sort implementation.
pub fn derive_ranks(players: &mut [PlayerEntry]) {
    let mut order: Vec<usize> = (0..players.len()).collect();
    // sort_by_key is stable: equal totals keep input order.
    order.sort_by_key(|&i| std::cmp::Reverse(players[i].total));
    for (position, index) in order.into_iter().enumerate() {
        players[index].rank = (position + 1) as i64;
    }
}

/// Full derivation pass: totals first, then ranks from the fresh totals.
pub fn derive_all(players: &mut [PlayerEntry]) {
    derive_totals(players);
    derive_ranks(players);
}
