// ==========================================
// Binari Ammissibili - suggestion orchestrator
// ==========================================
// Normalizes single/batch requests, resolves configuration once per
// category, and drives the selector for each train independently. Trains
// never interact: no shared-track exclusivity inside one call, and one
// train's validation failure leaves the rest of the batch untouched.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use crate::config::resolver::{Effective, RuleResolver};
use crate::config::store::RuleStore;
use crate::domain::track::TrackDataset;
use crate::domain::train::{
    SuggestionRequest, SuggestionResponse, SuggestionResult, TrainRequest,
};
use crate::engine::selector::TrackSelector;
use crate::engine::signals::{build_signal_lookup, normalise_signal_string};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

/// Structural request failure: nothing could be processed at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("request contains no trains")]
    NoTrains,
}

// ==========================================
// SuggestionOrchestrator
// ==========================================
pub struct SuggestionOrchestrator<S>
where
    S: RuleStore,
{
    resolver: RuleResolver<S>,
}

impl<S> SuggestionOrchestrator<S>
where
    S: RuleStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            resolver: RuleResolver::new(store),
        }
    }

    /// Process a request payload against a persisted dataset snapshot
    ///
    /// An ad-hoc `tracks_override` in the payload replaces the snapshot for
    /// this call only.
    pub fn suggest(
        &self,
        request: SuggestionRequest,
        dataset: &TrackDataset,
    ) -> Result<SuggestionResponse, SuggestionError> {
        let (trains, tracks_override) = request.into_parts();
        match tracks_override {
            Some(override_ds) => self.suggest_trains(&trains, &override_ds),
            None => self.suggest_trains(&trains, dataset),
        }
    }

    /// Process a normalized batch of trains against one dataset snapshot
    #[instrument(skip_all, fields(trains = trains.len()))]
    pub fn suggest_trains(
        &self,
        trains: &[TrainRequest],
        dataset: &TrackDataset,
    ) -> Result<SuggestionResponse, SuggestionError> {
        if trains.is_empty() {
            return Err(SuggestionError::NoTrains);
        }

        // Effective configuration resolved once per category per request
        let mut cache: HashMap<String, (Effective<CategoryRuleConfig>, Effective<PriorityProfile>)> =
            HashMap::new();
        let signal_lookup = build_signal_lookup(dataset);

        let mut items: Vec<SuggestionResult> = Vec::with_capacity(trains.len());
        for train in trains {
            if let Err(message) = train.validate() {
                tracing::warn!(
                    train_code = %train.train_code,
                    "invalid train descriptor: {}",
                    message
                );
                items.push(SuggestionResult {
                    train: train.clone(),
                    alternatives: Vec::new(),
                    error: Some(message),
                });
                continue;
            }

            let category = train.effective_category();
            let (rule, priority) = cache
                .entry(category.clone())
                .or_insert_with(|| {
                    (
                        self.resolver.resolve_rule(&category),
                        self.resolver.resolve_priority(&category),
                    )
                })
                .clone();

            // Planned track by name wins over the signal-code form
            let (planned_track, signal_suffix) = match &train.planned_track {
                Some(name) if !name.trim().is_empty() => (Some(name.clone()), false),
                _ => {
                    let (core, has_suffix) =
                        normalise_signal_string(train.planned_signal.as_deref());
                    if core.is_empty() {
                        (None, false)
                    } else {
                        match signal_lookup.get(&core) {
                            Some(name) => (Some(name.clone()), has_suffix),
                            None => {
                                tracing::warn!(
                                    signal = core.as_str(),
                                    "planned signal not found in dataset"
                                );
                                (None, has_suffix)
                            }
                        }
                    }
                }
            };

            let item = match TrackSelector::select(
                &train.train_code,
                train.train_length_m,
                dataset,
                planned_track.as_deref(),
                signal_suffix,
                rule.get(),
                priority.get(),
            ) {
                Ok(alternatives) => SuggestionResult {
                    train: train.clone(),
                    alternatives,
                    error: None,
                },
                Err(e) => SuggestionResult {
                    train: train.clone(),
                    alternatives: Vec::new(),
                    error: Some(e.to_string()),
                },
            };
            items.push(item);
        }

        // Legacy top-level field: always the first train's alternatives
        let alternatives = items
            .first()
            .map(|item| item.alternatives.clone())
            .unwrap_or_default();

        Ok(SuggestionResponse {
            alternatives,
            items,
        })
    }
}
