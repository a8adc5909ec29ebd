//! Pure aggregation over the persisted game collection.
//!
//! Every function here tolerates malformed legacy records: games without
//! players contribute nothing, a missing rank-1 entry falls back to the
//! first player in persisted order, and blank names or corporations feed
//! no bucket. Aggregation never fails; it produces a best-effort view even
//! while the upstream collection is mid-sync.

use std::collections::HashMap;

use super::models::{AggregateStats, PodiumCounts};
use crate::games::models::GameRecord;

/// Win count per player. Zero counts are implicit: a player who never won
/// does not appear.
pub fn winners_by_player(games: &[GameRecord]) -> HashMap<String, u32> {
    let mut wins: HashMap<String, u32> = HashMap::new();
    for game in games {
        if let Some(winner) = game.winner() {
            let name = winner.name.trim();
            if !name.is_empty() {
                *wins.entry(name.to_string()).or_default() += 1;
            }
        }
    }
    wins
}

/// Win count per corporation, using the same winner selection as
/// [`winners_by_player`]. A winner without a corporation feeds no bucket.
pub fn wins_by_corporation(games: &[GameRecord]) -> HashMap<String, u32> {
    let mut wins: HashMap<String, u32> = HashMap::new();
    for game in games {
        if let Some(winner) = game.winner() {
            let corporation = winner.corporation.trim();
            if !corporation.is_empty() {
                *wins.entry(corporation.to_string()).or_default() += 1;
            }
        }
    }
    wins
}

/// 1st/2nd/3rd place finishes per player across every game. Ranks outside
/// the podium are ignored here (they still count toward the win tallies
/// when the rank is exactly 1).
pub fn podium_by_player(games: &[GameRecord]) -> HashMap<String, PodiumCounts> {
    let mut podium: HashMap<String, PodiumCounts> = HashMap::new();
    for game in games {
        for player in &game.players {
            let name = player.name.trim();
            if name.is_empty() || !(1..=3).contains(&player.rank) {
                continue;
            }
            podium.entry(name.to_string()).or_default().record(player.rank);
        }
    }
    podium
}

/// All three tallies plus the presentation order, recomputed in full.
pub fn aggregate(games: &[GameRecord]) -> AggregateStats {
    let podium = podium_by_player(games);

    // First-appearance order across the game list, so equal weighted
    // scores sort deterministically.
    let mut order: Vec<String> = Vec::new();
    for game in games {
        for player in &game.players {
            let name = player.name.trim();
            if podium.contains_key(name) && !order.iter().any(|n| n == name) {
                order.push(name.to_string());
            }
        }
    }
    // Stable sort: ties keep the first-appearance order built above.
    order.sort_by_key(|name| std::cmp::Reverse(podium[name].weighted_score()));

    AggregateStats {
        winners_by_player: winners_by_player(games),
        wins_by_corporation: wins_by_corporation(games),
        podium_by_player: podium,
        podium_order: order,
    }
}
