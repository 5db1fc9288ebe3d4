// ==========================================
// Binari Ammissibili - signal code resolution
// ==========================================
// Tracks carry an optional external signal code; a static name->code table
// supplies defaults for the station layout. Planned signals may carry a
// trailing "f" marker which is preserved on output.
// ==========================================

use crate::domain::track::TrackDataset;
use std::collections::HashMap;

/// Placeholder code for tracks without a known signal
pub const DEFAULT_SIGNAL_CODE: &str = "TBD";

/// Station signal map: track name -> signal code
const TRACK_SIGNAL_MAP: [(&str, &str); 27] = [
    ("I N", "100"),
    ("I", "101"),
    ("II", "102"),
    ("III", "103"),
    ("IV", "104"),
    ("V", "105"),
    ("V BIS", "205"),
    ("VI", "106"),
    ("VII", "107"),
    ("VII BIS", "207"),
    ("VIII", "108"),
    ("IX", "109"),
    ("IX BIS", "209"),
    ("X", "110"),
    ("XI", "111"),
    ("XII", "112"),
    ("XIII", "113"),
    ("XIV", "114"),
    ("XIV BIS", "214"),
    ("XV", "115"),
    ("XVI", "116"),
    ("XVII", "117"),
    ("XVIII", "118"),
    ("XIX", "119"),
    ("XX", "120"),
    ("XXI", "121"),
    ("XXII", "122"),
];

/// Signal code for a track name from the static station map
pub fn resolve_signal_code(name: &str) -> String {
    let key = name.trim().to_uppercase();
    TRACK_SIGNAL_MAP
        .iter()
        .find(|(track, _)| *track == key)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| DEFAULT_SIGNAL_CODE.to_string())
}

/// Normalize a raw signal string: upper-cased core plus the trailing "f"
/// suffix marker, reported separately
pub fn normalise_signal_string(value: Option<&str>) -> (String, bool) {
    let raw = match value {
        Some(v) => v.trim(),
        None => return (String::new(), false),
    };
    if raw.is_empty() {
        return (String::new(), false);
    }
    let has_suffix = raw.to_lowercase().ends_with('f');
    let core = if has_suffix {
        &raw[..raw.len() - 1]
    } else {
        raw
    };
    (core.trim().to_uppercase(), has_suffix)
}

/// Reverse lookup over a dataset snapshot: signal code -> track name
pub fn build_signal_lookup(dataset: &TrackDataset) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for (name, info) in dataset {
        if let Some(signal) = &info.signal_code {
            let signal = signal.trim();
            if !signal.is_empty() {
                lookup.insert(signal.to_uppercase(), name.clone());
            }
        }
    }
    lookup
}

/// Signal code recorded for a track in the dataset, else the placeholder
pub fn signal_for_track(dataset: &TrackDataset, track_name: &str) -> String {
    dataset
        .get(track_name)
        .and_then(|info| info.signal_code.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_SIGNAL_CODE.to_string())
}

/// Format a signal code for output, re-applying the "f" marker when the
/// request carried one
pub fn format_signal_output(signal: &str, append_suffix: bool) -> String {
    let signal = signal.trim();
    if signal.is_empty() {
        return DEFAULT_SIGNAL_CODE.to_string();
    }
    if append_suffix && signal.to_uppercase() != DEFAULT_SIGNAL_CODE {
        format!("{}f", signal)
    } else {
        signal.to_string()
    }
}
