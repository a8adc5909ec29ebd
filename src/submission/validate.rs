use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::games::models::PlayerEntry;

/// Result of a validation pass over the authoring list.
///
/// `global` holds list-level problems that belong to no single row (such
/// as an empty player list). `entries` maps an entry id to a field-to-message
/// map; an entry that validates cleanly is simply absent. Cross-entry
/// conflicts (duplicate name, corporation, or rank) are attached to every
/// conflicting entry so the form can highlight all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub global: Vec<String>,
    pub entries: HashMap<String, BTreeMap<String, String>>,
}

impl ValidationReport {
    /// Submission is allowed only when this returns true.
    pub fn is_clean(&self) -> bool {
        self.global.is_empty() && self.entries.values().all(|fields| fields.is_empty())
    }

    fn attach(&mut self, entry_id: &str, field: &str, message: impl Into<String>) {
        self.entries
            .entry(entry_id.to_string())
            .or_default()
            .insert(field.to_string(), message.into());
    }
}

/// Validates the full authoring list. The caller is expected to have run
/// the derivation pass first; the `total` and rank checks exist to catch
/// out-of-band mutation, not as the primary derivation path.
pub fn validate(players: &[PlayerEntry]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if players.is_empty() {
        report.global.push("Add at least one player".to_string());
        return report;
    }

    let name_counts = occurrence_counts(players.iter().map(|p| p.name.trim()));
    let corporation_counts = occurrence_counts(players.iter().map(|p| p.corporation.trim()));
    let rank_counts = {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for player in players {
            *counts.entry(player.rank).or_default() += 1;
        }
        counts
    };

    let player_count = players.len() as i64;

    for player in players {
        let name = player.name.trim();
        if name.is_empty() {
            report.attach(&player.id, "name", "Name is required");
        } else if name_counts[name] > 1 {
            report.attach(&player.id, "name", "Player names must be unique");
        }

        let corporation = player.corporation.trim();
        if corporation.is_empty() {
            report.attach(&player.id, "corporation", "Corporation is required");
        } else if corporation_counts[corporation] > 1 {
            report.attach(
                &player.id,
                "corporation",
                "Corporation already taken by another player",
            );
        }

        if player.terraforming_rating < 1 {
            report.attach(
                &player.id,
                "terraformingRating",
                "Terraforming rating must be >= 1",
            );
        }
        if !(0..=15).contains(&player.awards) {
            report.attach(&player.id, "awards", "Awards must be 0..15");
        }
        if !(0..=15).contains(&player.milestones) {
            report.attach(&player.id, "milestones", "Milestones must be 0..15");
        } else if player.milestones % 5 != 0 {
            report.attach(&player.id, "milestones", "Milestones must step by 5");
        }
        if player.greeneries < 0 {
            report.attach(&player.id, "greeneries", "Greeneries must be >= 0");
        }
        if player.cities < 0 {
            report.attach(&player.id, "cities", "Cities must be >= 0");
        }
        if player.victory_points < 0 {
            report.attach(&player.id, "victoryPoints", "Victory points must be >= 0");
        }

        let expected = player.component_sum();
        if player.total != expected {
            report.attach(
                &player.id,
                "total",
                format!(
                    "Total mismatch for {}: expected {}, got {}",
                    player.display_label(),
                    expected,
                    player.total
                ),
            );
        }

        if player.rank < 1 || player.rank > player_count {
            report.attach(&player.id, "rank", "Invalid rank");
        } else if rank_counts[&player.rank] > 1 {
            report.attach(&player.id, "rank", "Players cannot share the same rank");
        }
    }

    report
}

fn occurrence_counts<'a>(values: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        if !value.is_empty() {
            *counts.entry(value).or_default() += 1;
        }
    }
    counts
}
