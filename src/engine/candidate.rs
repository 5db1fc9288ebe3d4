// ==========================================
// Binari Ammissibili - candidate metadata
// ==========================================
// Builds the per-track metadata snapshot the filter and ranker work on,
// resolves the planned track, and assembles the ranking record for each
// admissible candidate.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use crate::domain::track::{TrackData, TrackDataset};
use crate::engine::track_parser::parse_track_name;
use std::collections::BTreeMap;

/// Parsed, validated snapshot entry for one track, keyed by normalized name
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    /// Key of the entry in the source dataset
    pub source_name: String,
    pub number: Option<i64>,
    pub suffix: String,
    /// Total platform length in metres
    pub len_compl: i64,
    /// Functional capacity in metres, zero when absent
    pub cap_fun: i64,
}

/// Planned track resolved against the snapshot
#[derive(Debug, Clone, Default)]
pub struct PlannedTrack {
    pub number: Option<i64>,
    pub suffix: String,
    pub info: Option<TrackData>,
}

impl PlannedTrack {
    pub fn is_set(&self) -> bool {
        self.number.is_some() || !self.suffix.is_empty() || self.info.is_some()
    }

    /// Planned total platform length, zero when unknown
    pub fn total_platform_m(&self) -> i64 {
        self.info.as_ref().map(TrackData::total_platform_m).unwrap_or(0)
    }
}

/// Ranking record for one admissible candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    /// Normalized track name
    pub name: String,
    /// Key of the entry in the source dataset
    pub source_name: String,
    pub priority_class: i64,
    pub proximity: f64,
    /// Platform similarity to the planned track (higher is more similar)
    pub similarity: i64,
    pub same_number_bonus: f64,
    pub len_delta: i64,
    pub sort_num: f64,
    pub suffix_flag: i64,
    pub len_compl: i64,
    pub cap_fun: i64,
    pub number: Option<i64>,
    pub suffix: String,
}

/// Build the metadata snapshot, dropping tracks without a usable total
/// platform length field
pub fn build_track_metadata(tracks: &TrackDataset) -> BTreeMap<String, TrackMetadata> {
    let mut meta = BTreeMap::new();
    for (name, info) in tracks {
        let len_compl = match info.marciapiede_complessivo_m {
            Some(value) => value,
            None => {
                tracing::warn!(
                    track = name.as_str(),
                    "track missing 'marciapiede_complessivo_m', ignored"
                );
                continue;
            }
        };
        let parsed = parse_track_name(name);
        if parsed.normalized.is_empty() {
            tracing::warn!(track = name.as_str(), "track with blank name, ignored");
            continue;
        }
        meta.insert(
            parsed.normalized,
            TrackMetadata {
                source_name: name.clone(),
                number: parsed.number,
                suffix: parsed.suffix,
                len_compl,
                cap_fun: info.functional_capacity_m(),
            },
        );
    }
    meta
}

/// Resolve the planned track against the snapshot
///
/// The planned identifier is matched by (number, suffix) pair first, so
/// "4" and "IV" resolve to the same physical track; proximity criteria are
/// disabled (with a warning) when the planned track is not in the dataset.
pub fn resolve_planned_track(
    planned_track: Option<&str>,
    meta: &BTreeMap<String, TrackMetadata>,
    tracks: &TrackDataset,
) -> PlannedTrack {
    let planned_track = match planned_track {
        Some(p) if !p.trim().is_empty() => p,
        _ => return PlannedTrack::default(),
    };

    let parsed = parse_track_name(planned_track);
    let resolved = meta
        .iter()
        .find(|(_, m)| m.number == parsed.number && m.suffix == parsed.suffix)
        .map(|(norm, _)| norm.clone())
        .unwrap_or_else(|| parsed.normalized.clone());

    let info = meta
        .get(&resolved)
        .and_then(|m| tracks.get(&m.source_name))
        .or_else(|| tracks.get(&resolved))
        .cloned();

    if info.is_none() {
        tracing::warn!(
            planned = planned_track,
            "planned track not found in dataset, proximity disabled"
        );
    }

    PlannedTrack {
        number: parsed.number,
        suffix: parsed.suffix,
        info,
    }
}

/// Platform similarity score to the planned track:
/// +2 when the total platform length matches (>0), +1 when the high/low
/// profile matches
fn track_similarity_score(candidate: &TrackData, planned: Option<&TrackData>) -> i64 {
    let planned = match planned {
        Some(p) => p,
        None => return 0,
    };
    let mut score = 0;
    let cand_len = candidate.total_platform_m();
    if cand_len > 0 && cand_len == planned.total_platform_m() {
        score += 2;
    }
    if candidate.profile() == planned.profile() {
        score += 1;
    }
    score
}

/// Proximity rank to the planned track:
/// 1 for the same-number twin with a different suffix, the absolute number
/// distance otherwise, infinite when either number is unknown
pub fn proximity_rank(
    candidate_num: Option<i64>,
    candidate_suffix: &str,
    planned_num: Option<i64>,
    planned_suffix: &str,
) -> f64 {
    let (c, p) = match (candidate_num, planned_num) {
        (Some(c), Some(p)) => (c, p),
        _ => return f64::INFINITY,
    };
    if c == p && candidate_suffix != planned_suffix {
        return 1.0;
    }
    (c - p).abs() as f64
}

/// Category anchor for proximity when the request carries no planned track:
/// midpoint of the preferred band, else of the hard range
pub fn category_anchor(rule: &CategoryRuleConfig) -> Option<i64> {
    match (
        rule.preferred_min_track_number,
        rule.preferred_max_track_number,
    ) {
        (Some(min), Some(max)) => Some((min + max) / 2),
        _ => match (rule.min_track_number, rule.max_track_number) {
            (Some(min), Some(max)) => Some((min + max) / 2),
            _ => None,
        },
    }
}

/// Priority band: 0 = preferred, 1 = support
///
/// Tracks outside the hard range band as support; when both preferred
/// bounds are set, tracks outside the preferred band do too.
fn priority_class(number: Option<i64>, rule: &CategoryRuleConfig) -> i64 {
    let num = match number {
        Some(n) => n,
        None => return 0,
    };

    if let Some(min) = rule.min_track_number {
        if num < min {
            return 1;
        }
    }
    if let Some(max) = rule.max_track_number {
        if num > max {
            return 1;
        }
    }

    if let (Some(pref_min), Some(pref_max)) = (
        rule.preferred_min_track_number,
        rule.preferred_max_track_number,
    ) {
        return if pref_min <= num && num <= pref_max { 0 } else { 1 };
    }

    0
}

/// Assemble the ranking record for one surviving candidate
pub fn build_candidate_record(
    norm_name: &str,
    meta: &TrackMetadata,
    planned: &PlannedTrack,
    tracks: &TrackDataset,
    rule: &CategoryRuleConfig,
    priority: &PriorityProfile,
) -> CandidateRecord {
    let proximity = if planned.number.is_some() {
        proximity_rank(meta.number, &meta.suffix, planned.number, &planned.suffix)
    } else {
        match (meta.number, category_anchor(rule)) {
            (Some(n), Some(anchor)) => (n - anchor).abs() as f64,
            _ => f64::INFINITY,
        }
    };
    let similarity = tracks
        .get(&meta.source_name)
        .map(|info| track_similarity_score(info, planned.info.as_ref()))
        .unwrap_or(0);

    let planned_len = planned.total_platform_m();
    let reference_len = if planned_len > 0 { planned_len } else { meta.len_compl };
    let len_delta = (reference_len - meta.len_compl).abs();

    let same_number_bonus = match (planned.number, meta.number) {
        (Some(p), Some(c)) if p == c && meta.suffix != planned.suffix => {
            priority.same_number_bonus
        }
        _ => 0.0,
    };

    CandidateRecord {
        name: norm_name.to_string(),
        source_name: meta.source_name.clone(),
        priority_class: priority_class(meta.number, rule),
        proximity,
        similarity,
        same_number_bonus,
        len_delta,
        sort_num: meta.number.map(|n| n as f64).unwrap_or(f64::INFINITY),
        suffix_flag: if meta.suffix.is_empty() { 0 } else { 1 },
        len_compl: meta.len_compl,
        cap_fun: meta.cap_fun,
        number: meta.number,
        suffix: meta.suffix.clone(),
    }
}
