use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One player's line in a game, both while it is being authored and once
/// it has been persisted inside a [`GameRecord`].
///
/// `total` and `rank` are derived fields; the submission pipeline
/// recomputes them after every mutation, so outside the pipeline they
/// should never be written directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub corporation: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub terraforming_rating: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub awards: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub milestones: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub greeneries: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cities: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub victory_points: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub rank: i64,
}

impl PlayerEntry {
    /// Creates a fresh authoring row with the defaults the form starts from.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            corporation: String::new(),
            terraforming_rating: 1,
            awards: 0,
            milestones: 0,
            greeneries: 0,
            cities: 0,
            victory_points: 0,
            total: 0,
            rank: 1,
        }
    }

    /// Sum of the six scoring components. This is what `total` must equal.
    pub fn component_sum(&self) -> i64 {
        self.terraforming_rating
            + self.awards
            + self.milestones
            + self.greeneries
            + self.cities
            + self.victory_points
    }

    /// Name to identify the entry by in error messages: the trimmed player
    /// name when present, otherwise the row id.
    pub fn display_label(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            &self.id
        } else {
            trimmed
        }
    }
}

/// A persisted, immutable snapshot of a completed game.
///
/// Records read back from the store may be malformed legacy documents;
/// deserialization is deliberately lenient (missing or wrong-typed fields
/// collapse to defaults) so the aggregator always gets a best-effort view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_players")]
    pub players: Vec<PlayerEntry>,
    /// RFC 3339 timestamp string, assigned at submission.
    #[serde(default)]
    pub created_at: String,
    /// Set on records saved to the local-only fallback store so the UI can
    /// distinguish them from records in the shared collection.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_local_only: bool,
}

impl GameRecord {
    /// The winning entry: rank 1, or the first entry in persisted order
    /// when no entry carries rank 1 (malformed legacy data).
    pub fn winner(&self) -> Option<&PlayerEntry> {
        self.players
            .iter()
            .find(|p| p.rank == 1)
            .or_else(|| self.players.first())
    }
}

/// Accepts numbers, numeric strings, or nothing at all; anything that does
/// not parse cleanly becomes 0. Legacy documents were written by a form
/// that coerced raw input with `Number(...)`, so stored values are not
/// guaranteed to be integers.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Tolerates a missing or non-array `players` field by collapsing it to an
/// empty list; individual entries that are not objects are dropped.
fn lenient_players<'de, D>(deserializer: D) -> Result<Vec<PlayerEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_starts_with_form_defaults() {
        let entry = PlayerEntry::empty("p-1");
        assert_eq!(entry.id, "p-1");
        assert_eq!(entry.terraforming_rating, 1);
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.total, 0);
        assert_eq!(entry.component_sum(), 1);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let entry = PlayerEntry::empty("p-1");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("terraformingRating").is_some());
        assert!(json.get("victoryPoints").is_some());
        assert!(json.get("terraforming_rating").is_none());
    }

    #[test]
    fn lenient_fields_coerce_strings_and_nulls_to_numbers() {
        let entry: PlayerEntry = serde_json::from_str(
            r#"{"id":"p-1","name":"Alice","terraformingRating":"25","awards":null,"milestones":"junk"}"#,
        )
        .unwrap();
        assert_eq!(entry.terraforming_rating, 25);
        assert_eq!(entry.awards, 0);
        assert_eq!(entry.milestones, 0);
    }

    #[test]
    fn record_with_missing_players_deserializes_to_empty_list() {
        let record: GameRecord =
            serde_json::from_str(r#"{"id":"g-1","createdAt":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert!(record.players.is_empty());
        assert!(record.winner().is_none());
    }

    #[test]
    fn record_with_non_array_players_deserializes_to_empty_list() {
        let record: GameRecord =
            serde_json::from_str(r#"{"id":"g-1","players":"corrupted"}"#).unwrap();
        assert!(record.players.is_empty());
    }

    #[test]
    fn winner_prefers_rank_one() {
        let record: GameRecord = serde_json::from_str(
            r#"{"players":[{"id":"a","name":"Alice","rank":2},{"id":"b","name":"Bob","rank":1}]}"#,
        )
        .unwrap();
        assert_eq!(record.winner().unwrap().name, "Bob");
    }

    #[test]
    fn winner_falls_back_to_first_entry_without_rank_one() {
        let record: GameRecord = serde_json::from_str(
            r#"{"players":[{"id":"a","name":"Alice"},{"id":"b","name":"Bob"}]}"#,
        )
        .unwrap();
        assert_eq!(record.winner().unwrap().name, "Alice");
    }

    #[test]
    fn local_only_marker_is_omitted_when_false() {
        let record = GameRecord {
            id: "g-1".to_string(),
            players: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_local_only: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("isLocalOnly").is_none());

        let local = GameRecord {
            is_local_only: true,
            ..record
        };
        let json = serde_json::to_value(&local).unwrap();
        assert_eq!(json.get("isLocalOnly"), Some(&Value::Bool(true)));
    }
}
