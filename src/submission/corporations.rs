use serde::{Deserialize, Serialize};

/// Expansion a corporation was introduced in; used by the form to filter
/// and badge search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    Base,
    Prelude,
    Venus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Corporation {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub expansion: Expansion,
}

/// Canonical corporation list (base + Prelude + Venus Next), kept in
/// alphabetical order by display name.
pub const CORPORATIONS: &[Corporation] = &[
    Corporation { key: "AP", name: "Aphrodite", color: "#c0392b", expansion: Expansion::Venus },
    Corporation { key: "AC", name: "Arcadian Communities", color: "#1abc9c", expansion: Expansion::Venus },
    Corporation { key: "AD", name: "AstroDrill", color: "#34495e", expansion: Expansion::Venus },
    Corporation { key: "CE", name: "Celestic", color: "#b23aee", expansion: Expansion::Venus },
    Corporation { key: "CS", name: "Cheung Shing Mars", color: "#e74c3c", expansion: Expansion::Prelude },
    Corporation { key: "CR", name: "Credicor", color: "#2f80ed", expansion: Expansion::Base },
    Corporation { key: "EC", name: "Ecoline", color: "#27ae60", expansion: Expansion::Base },
    Corporation { key: "HE", name: "Helion", color: "#f39c12", expansion: Expansion::Base },
    Corporation { key: "IC", name: "Interplanetary Cinematics", color: "#f2994a", expansion: Expansion::Base },
    Corporation { key: "IN", name: "Inventrix", color: "#9b59b6", expansion: Expansion::Base },
    Corporation { key: "MN", name: "Manutech", color: "#16a085", expansion: Expansion::Venus },
    Corporation { key: "MG", name: "Mining Guild", color: "#b5832a", expansion: Expansion::Base },
    Corporation { key: "MS", name: "Morning Star Inc.", color: "#f39c12", expansion: Expansion::Venus },
    Corporation { key: "PU", name: "Pharmacy Union", color: "#9b59b6", expansion: Expansion::Venus },
    Corporation { key: "PB", name: "Phobolog", color: "#e67e22", expansion: Expansion::Base },
    Corporation { key: "PL", name: "Point Luna", color: "#d35400", expansion: Expansion::Prelude },
    Corporation { key: "RC", name: "Recyclon", color: "#795548", expansion: Expansion::Venus },
    Corporation { key: "RI", name: "Robinson Industries", color: "#7f8c8d", expansion: Expansion::Prelude },
    Corporation { key: "SS", name: "Saturn Systems", color: "#16a085", expansion: Expansion::Base },
    Corporation { key: "SP", name: "Splice", color: "#27ae60", expansion: Expansion::Venus },
    Corporation { key: "TE", name: "Teractor", color: "#95a5a6", expansion: Expansion::Base },
    Corporation { key: "TR", name: "Tharsis Republic", color: "#34495e", expansion: Expansion::Base },
    Corporation { key: "TG", name: "ThorGate", color: "#2d9cdb", expansion: Expansion::Base },
    Corporation { key: "UN", name: "United Nations Mars Initiative", color: "#4b86b4", expansion: Expansion::Base },
    Corporation { key: "VT", name: "Valley Trust", color: "#3498db", expansion: Expansion::Prelude },
    Corporation { key: "VR", name: "Viron", color: "#2980b9", expansion: Expansion::Venus },
    Corporation { key: "VD", name: "Vitor", color: "#8e44ad", expansion: Expansion::Prelude },
];

/// Case-insensitive search over display names and short keys. An empty or
/// whitespace query returns the whole list.
pub fn search(query: &str) -> Vec<&'static Corporation> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return CORPORATIONS.iter().collect();
    }
    CORPORATIONS
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q) || c.key.to_lowercase().contains(&q))
        .collect()
}

/// Hint helper: true when no other entry in the game has already claimed
/// this corporation. The validator remains the authoritative check.
pub fn is_available(name: &str, taken: &[String]) -> bool {
    !taken.iter().any(|t| t.trim() == name)
}
