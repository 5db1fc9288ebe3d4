// ==========================================
// Binari Ammissibili - track entity
// ==========================================
// Field names follow the production wire format (Italian), including the
// historical misspellings of capacita_funzionale_m found in old data files.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time snapshot of the station's tracks, keyed by track name.
///
/// BTreeMap so every iteration over a snapshot is deterministic.
pub type TrackDataset = BTreeMap<String, TrackData>;

/// Physical data for one track
///
/// `marciapiede_complessivo_m` is optional at the wire level: tracks missing
/// it are dropped (with a warning) when the engine builds its metadata,
/// instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
    /// Total usable platform length in metres
    #[serde(default)]
    pub marciapiede_complessivo_m: Option<i64>,

    /// High platform length in metres (if available)
    #[serde(default)]
    pub marciapiede_alto_m: i64,

    /// Low platform length in metres (if available)
    #[serde(default)]
    pub marciapiede_basso_m: i64,

    /// Functional capacity length in metres; overrides the total platform
    /// length for admissibility when present
    #[serde(
        default,
        alias = "capacita_funzioanle_m",
        alias = "capacita_funzionle_m",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacita_funzionale_m: Option<i64>,

    /// External signal code label (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_code: Option<String>,
}

impl TrackData {
    /// Total platform length, zero when missing
    pub fn total_platform_m(&self) -> i64 {
        self.marciapiede_complessivo_m.unwrap_or(0)
    }

    /// Functional capacity, zero when missing
    pub fn functional_capacity_m(&self) -> i64 {
        self.capacita_funzionale_m.unwrap_or(0)
    }

    /// Platform profile: (high platform present, low platform present)
    pub fn profile(&self) -> (bool, bool) {
        (self.marciapiede_alto_m > 0, self.marciapiede_basso_m > 0)
    }
}
