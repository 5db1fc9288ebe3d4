// ==========================================
// Binari Ammissibili - per-train track selection
// ==========================================
// Drives the full pipeline for one train: metadata snapshot, planned-track
// resolution, admissibility filter, candidate evaluation, ranking and
// reason composition.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use crate::domain::track::TrackDataset;
use crate::domain::train::SuggestedTrack;
use crate::engine::admissibility::AdmissibilityFilter;
use crate::engine::candidate::{
    build_candidate_record, build_track_metadata, resolve_planned_track,
};
use crate::engine::ranking::Ranker;
use crate::engine::reason::build_reason;
use crate::engine::signals::{format_signal_output, signal_for_track};
use thiserror::Error;
use tracing::instrument;

/// Per-train selection failure
///
/// An empty admissible set is NOT a failure; these cover structurally
/// unusable input only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("train length must be greater than zero")]
    InvalidTrainLength,

    #[error("no valid tracks found in dataset")]
    EmptyDataset,
}

// ==========================================
// TrackSelector
// ==========================================
pub struct TrackSelector;

impl TrackSelector {
    /// Compute the ordered admissible alternatives for one train
    ///
    /// # Parameters
    /// - train_code: train identifier (logging only)
    /// - train_length_m: train length in metres, must be positive
    /// - tracks: dataset snapshot for this request
    /// - planned_track: originally assigned track name, if known
    /// - signal_suffix: the planned signal carried the trailing "f" marker
    /// - rule / priority: effective configuration for the train's category
    ///
    /// # Returns
    /// Up to MAX_SUGGESTIONS suggested tracks, best first; empty when no
    /// track is admissible.
    #[instrument(skip_all, fields(train_code = %train_code))]
    pub fn select(
        train_code: &str,
        train_length_m: i64,
        tracks: &TrackDataset,
        planned_track: Option<&str>,
        signal_suffix: bool,
        rule: &CategoryRuleConfig,
        priority: &PriorityProfile,
    ) -> Result<Vec<SuggestedTrack>, SelectionError> {
        if train_length_m <= 0 {
            return Err(SelectionError::InvalidTrainLength);
        }

        let metadata = build_track_metadata(tracks);
        if metadata.is_empty() {
            return Err(SelectionError::EmptyDataset);
        }

        let planned = resolve_planned_track(planned_track, &metadata, tracks);

        let mut candidates = Vec::new();
        for (norm_name, meta) in &metadata {
            if AdmissibilityFilter::is_excluded(norm_name, meta.number, &meta.suffix, rule, &planned)
            {
                continue;
            }
            if !AdmissibilityFilter::meets_length(meta.len_compl, meta.cap_fun, train_length_m, rule)
            {
                continue;
            }
            candidates.push(build_candidate_record(
                norm_name, meta, &planned, tracks, rule, priority,
            ));
        }

        let ranked = Ranker::rank(candidates, priority);
        tracing::debug!(admissible = ranked.len(), "selection complete");

        Ok(ranked
            .into_iter()
            .map(|record| {
                let signal = signal_for_track(tracks, &record.source_name);
                let reason = build_reason(
                    &record,
                    train_length_m,
                    &planned,
                    tracks.get(&record.source_name),
                    rule,
                );
                SuggestedTrack {
                    track: format_signal_output(&signal, signal_suffix),
                    track_name: Some(record.name),
                    reason,
                }
            })
            .collect())
    }
}
