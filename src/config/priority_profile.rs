// ==========================================
// Binari Ammissibili - priority profile configuration
// ==========================================
// Ordered, weighted, directional ranking criteria per category.
// Same override-or-default resolution as the category rules.
// ==========================================

use crate::domain::types::{CategoryKey, CriterionKey};
use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

fn default_direction() -> f64 {
    1.0
}

fn default_same_number_bonus() -> f64 {
    -1.0
}

/// One ranking dimension: criterion kind, weight and direction sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityCriterion {
    pub key: CriterionKey,

    #[serde(default = "default_weight")]
    pub weight: f64,

    /// +1.0 ascending (lower raw value ranks first), -1.0 to invert
    #[serde(default = "default_direction")]
    pub direction: f64,
}

impl PriorityCriterion {
    pub fn new(key: CriterionKey) -> Self {
        Self {
            key,
            weight: default_weight(),
            direction: default_direction(),
        }
    }
}

/// Ordered ranking configuration for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityProfile {
    #[serde(default)]
    pub criteria: Vec<PriorityCriterion>,

    /// Signed adjustment for tracks sharing the planned track's base number;
    /// negative favors the variant, positive penalizes it
    #[serde(default = "default_same_number_bonus")]
    pub same_number_bonus: f64,
}

impl Default for PriorityProfile {
    fn default() -> Self {
        Self::builtin(CategoryKey::Default)
    }
}

impl PriorityProfile {
    /// Built-in default profile for a category family
    pub fn builtin(key: CategoryKey) -> Self {
        let base_criteria = vec![
            PriorityCriterion::new(CriterionKey::PriorityClass),
            PriorityCriterion::new(CriterionKey::Proximity),
            PriorityCriterion::new(CriterionKey::Similarity),
            PriorityCriterion::new(CriterionKey::SameNumber),
            PriorityCriterion::new(CriterionKey::LengthDelta),
            PriorityCriterion::new(CriterionKey::TrackNumber),
            PriorityCriterion::new(CriterionKey::SuffixFlag),
        ];

        match key {
            // Service movements prefer platformless and BIS tracks, keeping
            // passenger platforms free
            CategoryKey::Inv => {
                let mut criteria = vec![
                    PriorityCriterion::new(CriterionKey::NoPlatformFirst),
                    PriorityCriterion::new(CriterionKey::BisPreference),
                ];
                criteria.extend(base_criteria);
                Self {
                    criteria,
                    same_number_bonus: default_same_number_bonus(),
                }
            }
            _ => Self {
                criteria: base_criteria,
                same_number_bonus: default_same_number_bonus(),
            },
        }
    }
}
