// ==========================================
// Binari Ammissibili - ranking engine
// ==========================================
// Stable multi-key sort over the configured criteria, lowest composite
// tuple first; ties fall back to the normalized track name so the order
// is fully deterministic. Output truncated to MAX_SUGGESTIONS.
// ==========================================

use crate::config::priority_profile::{PriorityCriterion, PriorityProfile};
use crate::domain::types::CriterionKey;
use crate::engine::candidate::CandidateRecord;
use crate::engine::criteria::CriterionEvaluator;
use crate::MAX_SUGGESTIONS;
use std::cmp::Ordering;

// ==========================================
// Ranker
// ==========================================
pub struct Ranker;

impl Ranker {
    /// Order the admissible candidates and truncate to the top entries
    ///
    /// Sort keys, in configured order: evaluated scalar x weight x
    /// direction. An empty criteria list degrades to the track number
    /// alone.
    pub fn rank(
        mut candidates: Vec<CandidateRecord>,
        priority: &PriorityProfile,
    ) -> Vec<CandidateRecord> {
        let fallback = [PriorityCriterion::new(CriterionKey::TrackNumber)];
        let criteria: &[PriorityCriterion] = if priority.criteria.is_empty() {
            &fallback
        } else {
            &priority.criteria
        };

        let key_vector = |record: &CandidateRecord| -> Vec<f64> {
            criteria
                .iter()
                .map(|c| CriterionEvaluator::value(c.key, record) * c.weight * c.direction)
                .collect()
        };

        candidates.sort_by(|a, b| {
            let ka = key_vector(a);
            let kb = key_vector(b);
            for (va, vb) in ka.iter().zip(kb.iter()) {
                match va.total_cmp(vb) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            // tie-break: ascending normalized name, so equal-score runs
            // keep a stable, reproducible order
            a.name.cmp(&b.name)
        });

        candidates.truncate(MAX_SUGGESTIONS);
        candidates
    }
}
