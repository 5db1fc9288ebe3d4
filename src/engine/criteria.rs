// ==========================================
// Binari Ammissibili - criterion evaluator
// ==========================================
// One evaluator per criterion kind. The raw scalar is combined with the
// configured weight and direction by the ranker; lower combined values
// rank first.
// ==========================================

use crate::domain::types::CriterionKey;
use crate::engine::candidate::CandidateRecord;

// ==========================================
// CriterionEvaluator
// ==========================================
pub struct CriterionEvaluator;

impl CriterionEvaluator {
    /// Raw scalar value of one criterion for one candidate
    pub fn value(key: CriterionKey, record: &CandidateRecord) -> f64 {
        match key {
            CriterionKey::PriorityClass => record.priority_class as f64,
            CriterionKey::Proximity => record.proximity,
            CriterionKey::Similarity => -(record.similarity as f64),
            CriterionKey::SameNumber => record.same_number_bonus,
            CriterionKey::LengthDelta => record.len_delta as f64,
            CriterionKey::TrackNumber => record.sort_num,
            CriterionKey::SuffixFlag => record.suffix_flag as f64,
            CriterionKey::NoPlatformFirst => {
                if record.len_compl == 0 {
                    0.0
                } else {
                    1.0
                }
            }
            CriterionKey::BisPreference => {
                if record.suffix == "BIS" {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}
