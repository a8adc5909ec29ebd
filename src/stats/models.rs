use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Podium finishes for one player across all games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumCounts {
    pub rank1: u32,
    pub rank2: u32,
    pub rank3: u32,
}

impl PodiumCounts {
    /// Presentation weight: gold counts triple, silver double, bronze once.
    pub fn weighted_score(&self) -> u32 {
        3 * self.rank1 + 2 * self.rank2 + self.rank3
    }

    /// Records a finish if the rank is on the podium; other ranks are
    /// ignored for this tally.
    pub fn record(&mut self, rank: i64) {
        match rank {
            1 => self.rank1 += 1,
            2 => self.rank2 += 1,
            3 => self.rank3 += 1,
            _ => {}
        }
    }
}

/// The three tallies the stats view renders, recomputed in full from the
/// game collection on every read. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Games won per player; players who never won are absent.
    pub winners_by_player: HashMap<String, u32>,
    /// Games won per winning corporation; blank corporations feed no bucket.
    pub wins_by_corporation: HashMap<String, u32>,
    /// 1st/2nd/3rd place finishes per player.
    pub podium_by_player: HashMap<String, PodiumCounts>,
    /// Players sorted by weighted podium score descending; ties keep
    /// first-appearance order across the game list.
    pub podium_order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_score_favors_gold_over_silver_over_bronze() {
        let counts = PodiumCounts {
            rank1: 2,
            rank2: 1,
            rank3: 3,
        };
        assert_eq!(counts.weighted_score(), 11);
    }

    #[test]
    fn record_ignores_ranks_off_the_podium() {
        let mut counts = PodiumCounts::default();
        counts.record(1);
        counts.record(3);
        counts.record(4);
        counts.record(0);
        assert_eq!(
            counts,
            PodiumCounts {
                rank1: 1,
                rank2: 0,
                rank3: 1
            }
        );
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = AggregateStats::default();
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("winnersByPlayer").is_some());
        assert!(json.get("winsByCorporation").is_some());
        assert!(json.get("podiumByPlayer").is_some());
        assert!(json.get("podiumOrder").is_some());
    }
}
