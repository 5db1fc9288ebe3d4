// ==========================================
// Binari Ammissibili - train request and suggestion DTOs
// ==========================================
// Wire shapes preserved for backward compatibility with existing callers:
// a request may be a {"trains": [...]} envelope, a bare list, or a legacy
// single-train object; the response always carries the legacy top-level
// `alternatives` field aliasing the first train's result.
// ==========================================

use crate::domain::track::TrackDataset;
use serde::{Deserialize, Serialize};

// ==========================================
// TrainRequest
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRequest {
    /// Train number or code
    pub train_code: String,

    /// Train length in metres
    pub train_length_m: i64,

    /// Operational category (REG, IC, ES*, INV...)
    pub train_category: String,

    /// Train requires PRM-compliant facilities
    #[serde(default)]
    pub is_prm: bool,

    /// Planned track name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_track: Option<String>,

    /// Planned track signal code (optional, may carry a trailing "f")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_signal: Option<String>,
}

impl TrainRequest {
    /// Validate the structural fields of the request
    ///
    /// Per-train failures never abort a batch; the orchestrator records the
    /// message on the corresponding result item.
    pub fn validate(&self) -> Result<(), String> {
        if self.train_code.trim().is_empty() {
            return Err("train_code must not be empty".to_string());
        }
        if self.train_length_m <= 0 {
            return Err("train_length_m must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Category under which rules and priorities are resolved
    ///
    /// PRM trains are evaluated under the PRM category regardless of their
    /// operational category.
    pub fn effective_category(&self) -> String {
        if self.is_prm {
            "PRM".to_string()
        } else {
            self.train_category.trim().to_uppercase()
        }
    }
}

// ==========================================
// SuggestionRequest - accepted payload shapes
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionRequest {
    /// Canonical envelope: {"trains": [...], "tracks_override": {...}}
    Batch {
        trains: Vec<TrainRequest>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tracks_override: Option<TrackDataset>,
    },
    /// Bare list of train descriptors
    List(Vec<TrainRequest>),
    /// Legacy single-train payload
    Single {
        #[serde(flatten)]
        train: TrainRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tracks_override: Option<TrackDataset>,
    },
}

impl SuggestionRequest {
    /// Normalize to (trains, optional ad-hoc dataset override)
    pub fn into_parts(self) -> (Vec<TrainRequest>, Option<TrackDataset>) {
        match self {
            SuggestionRequest::Batch {
                trains,
                tracks_override,
            } => (trains, tracks_override),
            SuggestionRequest::List(trains) => (trains, None),
            SuggestionRequest::Single {
                train,
                tracks_override,
            } => (vec![train], tracks_override),
        }
    }
}

// ==========================================
// Suggestion output
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTrack {
    /// Track identifier shown to the caller (signal code when resolvable)
    pub track: String,

    /// Resolved human-readable track name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,

    /// Composed justification text (advisory, localized)
    pub reason: String,
}

/// Per-train result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub train: TrainRequest,
    pub alternatives: Vec<SuggestedTrack>,

    /// Present when this train's descriptor failed validation; the other
    /// trains of the batch are unaffected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Preserved for backward compatibility: aliases the first train's
    /// alternatives
    pub alternatives: Vec<SuggestedTrack>,

    /// Detailed suggestions for each processed train
    pub items: Vec<SuggestionResult>,
}
