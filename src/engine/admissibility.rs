// ==========================================
// Binari Ammissibili - admissibility filter
// ==========================================
// Hard exclusion rules for one train/category over the track snapshot.
// Every rule is independent; failing any one excludes the track. An empty
// surviving set is a valid result, never an error.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::engine::candidate::PlannedTrack;

/// Service-yard entries that can appear in the dataset but are never
/// admissible for passenger or service stops
const SERVICE_TRACKS: [&str; 1] = ["SSE AMB."];

// ==========================================
// AdmissibilityFilter
// ==========================================
pub struct AdmissibilityFilter;

impl AdmissibilityFilter {
    /// Check the exclusion rules for one track
    ///
    /// Rules:
    /// 1. service-yard tracks are always excluded
    /// 2. the planned track itself (same number and suffix) is excluded
    /// 3. BIS tracks require allow_bis
    /// 4. parsed number outside [min_track_number, max_track_number]
    /// 5. parsed number in deny_track_numbers
    /// 6. normalized name in deny_track_names
    /// 7. normalized name contains any deny_track_patterns entry
    ///    (case-insensitive)
    pub fn is_excluded(
        norm_name: &str,
        number: Option<i64>,
        suffix: &str,
        rule: &CategoryRuleConfig,
        planned: &PlannedTrack,
    ) -> bool {
        // Rule 1: service yard
        if SERVICE_TRACKS.contains(&norm_name) {
            return true;
        }

        // Rule 2: the planned track is not an alternative
        if planned.number.is_some() && number == planned.number && suffix == planned.suffix {
            return true;
        }

        // Rule 3: BIS admission
        if suffix == "BIS" && !rule.allow_bis {
            return true;
        }

        // Rules 4-5: numeric constraints
        if let Some(num) = number {
            if let Some(min) = rule.min_track_number {
                if num < min {
                    return true;
                }
            }
            if let Some(max) = rule.max_track_number {
                if num > max {
                    return true;
                }
            }
            if rule.deny_track_numbers.contains(&num) {
                return true;
            }
        }

        // Rule 6: exact name denial
        if rule.deny_track_names.contains(norm_name) {
            return true;
        }

        // Rule 7: substring denial
        let upper_name = norm_name.to_uppercase();
        if rule
            .deny_track_patterns
            .iter()
            .any(|p| !p.is_empty() && upper_name.contains(&p.to_uppercase()))
        {
            return true;
        }

        false
    }

    /// Check the platform-length gate for one track
    ///
    /// Functional capacity overrides the total platform length when set.
    /// Categories allowing platformless stops admit zero-platform tracks
    /// with no capacity figure.
    pub fn meets_length(
        len_compl: i64,
        cap_fun: i64,
        train_length_m: i64,
        rule: &CategoryRuleConfig,
    ) -> bool {
        if !rule.allow_no_platform && len_compl <= 0 {
            return false;
        }

        if rule.allow_no_platform {
            if cap_fun > 0 {
                return cap_fun >= train_length_m;
            }
            if len_compl > 0 {
                return len_compl >= train_length_m;
            }
            return true;
        }

        len_compl >= train_length_m
    }
}
