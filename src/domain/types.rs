// ==========================================
// Binari Ammissibili - domain type definitions
// ==========================================
// Ranking criteria are a closed set: adding an analysis dimension means
// extending CriterionKey and its evaluator table, never the data shape.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Ranking criterion (Criterion Key)
// ==========================================
// Wire format: snake_case (matches the persisted priority profiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKey {
    PriorityClass,   // category band: preferred range first
    Proximity,       // numeric distance to the planned track
    Similarity,      // platform similarity to the planned track
    SameNumber,      // signed bonus for same-number variants
    LengthDelta,     // platform length gap vs. the reference
    TrackNumber,     // raw parsed number, final deterministic key
    SuffixFlag,      // any suffix word present
    NoPlatformFirst, // platformless tracks first (INV service moves)
    BisPreference,   // BIS tracks first
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionKey::PriorityClass => write!(f, "priority_class"),
            CriterionKey::Proximity => write!(f, "proximity"),
            CriterionKey::Similarity => write!(f, "similarity"),
            CriterionKey::SameNumber => write!(f, "same_number"),
            CriterionKey::LengthDelta => write!(f, "length_delta"),
            CriterionKey::TrackNumber => write!(f, "track_number"),
            CriterionKey::SuffixFlag => write!(f, "suffix_flag"),
            CriterionKey::NoPlatformFirst => write!(f, "no_platform_first"),
            CriterionKey::BisPreference => write!(f, "bis_preference"),
        }
    }
}

// ==========================================
// Category family (Category Key)
// ==========================================
// Built-in rule/priority defaults are keyed by family; a custom override
// may exist for any raw category string and wins over the family default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    Default,
    Inv,
    Prm,
    EsStar,
    Lh,
}

/// Long-haul operational categories, all sharing the LH family defaults
pub const LH_CATEGORIES: [&str; 12] = [
    "LH", "EC", "EN", "IC", "ICN", "EXP", "NCL", "ES*", "FR", "FA", "FB", "NTV",
];

impl CategoryKey {
    /// Normalize a raw category string to its built-in family
    ///
    /// Unknown categories fall back to `Default`; this is the normal path
    /// for regional services, never an error.
    pub fn normalize(category: &str) -> Self {
        let cat = category.trim().to_uppercase();
        match cat.as_str() {
            "INV" => CategoryKey::Inv,
            "PRM" => CategoryKey::Prm,
            "ES*" => CategoryKey::EsStar,
            "LH" => CategoryKey::Lh,
            _ if LH_CATEGORIES.contains(&cat.as_str()) => CategoryKey::Lh,
            _ if cat.starts_with("ES") => CategoryKey::EsStar,
            _ => CategoryKey::Default,
        }
    }

    /// Key under which this family is stored and administered
    pub fn storage_key(&self) -> &'static str {
        match self {
            CategoryKey::Default => "default",
            CategoryKey::Inv => "INV",
            CategoryKey::Prm => "PRM",
            CategoryKey::EsStar => "ES*",
            CategoryKey::Lh => "LH",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
