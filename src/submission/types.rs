use serde::{Deserialize, Serialize};

use super::corporations::{Corporation, Expansion};
use super::validate::ValidationReport;
use crate::games::models::PlayerEntry;

/// Draft player list posted by the form, for preview or submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRequest {
    pub players: Vec<PlayerEntry>,
}

/// Pipeline output: the draft with derived totals/ranks filled in, plus
/// every validation violation found.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub players: Vec<PlayerEntry>,
    pub report: ValidationReport,
}

/// Query parameters for the corporation reference list.
#[derive(Debug, Default, Deserialize)]
pub struct CorporationQuery {
    /// Search text matched against names and short keys.
    pub q: Option<String>,
    /// Comma-separated corporation names already claimed in the draft.
    pub taken: Option<String>,
}

/// One corporation in the reference list, with the availability hint for
/// the current draft. The hint is advisory; the validator enforces
/// uniqueness at submit time.
#[derive(Debug, Serialize)]
pub struct CorporationInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub expansion: Expansion,
    pub available: bool,
}

impl CorporationInfo {
    pub fn from_corporation(corporation: &Corporation, taken: &[String]) -> Self {
        Self {
            key: corporation.key,
            name: corporation.name,
            color: corporation.color,
            expansion: corporation.expansion,
            available: super::corporations::is_available(corporation.name, taken),
        }
    }
}
