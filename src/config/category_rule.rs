// ==========================================
// Binari Ammissibili - category rule configuration
// ==========================================
// A category either has a custom persisted rule or uses the built-in
// default for its family; the override is always the whole record.
// ==========================================

use crate::domain::types::CategoryKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hard admissibility rule for one train category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRuleConfig {
    /// BIS (secondary/parallel) tracks admitted
    #[serde(default)]
    pub allow_bis: bool,

    /// Tracks without any platform admitted (service movements)
    #[serde(default)]
    pub allow_no_platform: bool,

    /// Hard lower bound on the track number
    #[serde(default)]
    pub min_track_number: Option<i64>,

    /// Hard upper bound on the track number
    #[serde(default)]
    pub max_track_number: Option<i64>,

    /// Soft preferred band, lower bound
    #[serde(default)]
    pub preferred_min_track_number: Option<i64>,

    /// Soft preferred band, upper bound
    #[serde(default)]
    pub preferred_max_track_number: Option<i64>,

    /// Exact normalized track names to exclude
    #[serde(default)]
    pub deny_track_names: BTreeSet<String>,

    /// Substring patterns to exclude (matched case-insensitively)
    #[serde(default)]
    pub deny_track_patterns: Vec<String>,

    /// Parsed track numbers to exclude
    #[serde(default)]
    pub deny_track_numbers: BTreeSet<i64>,
}

impl Default for CategoryRuleConfig {
    fn default() -> Self {
        Self::builtin(CategoryKey::Default)
    }
}

impl CategoryRuleConfig {
    /// Built-in default rule for a category family
    pub fn builtin(key: CategoryKey) -> Self {
        let base = Self {
            allow_bis: false,
            allow_no_platform: false,
            min_track_number: None,
            max_track_number: None,
            preferred_min_track_number: None,
            preferred_max_track_number: None,
            deny_track_names: BTreeSet::new(),
            deny_track_patterns: Vec::new(),
            deny_track_numbers: BTreeSet::new(),
        };

        match key {
            CategoryKey::Default => base,
            // Service movements: BIS and platformless tracks are fine
            CategoryKey::Inv => Self {
                allow_bis: true,
                allow_no_platform: true,
                ..base
            },
            // Platform-access accommodation: the NORD stubs are unreachable
            // without stairs
            CategoryKey::Prm => Self {
                deny_track_names: BTreeSet::from(["I NORD".to_string()]),
                deny_track_patterns: vec![" NORD".to_string()],
                ..base
            },
            CategoryKey::EsStar => Self {
                deny_track_numbers: BTreeSet::from([15]),
                ..base
            },
            CategoryKey::Lh => Self {
                min_track_number: Some(1),
                max_track_number: Some(14),
                preferred_min_track_number: Some(2),
                preferred_max_track_number: Some(13),
                ..base
            },
        }
    }
}
