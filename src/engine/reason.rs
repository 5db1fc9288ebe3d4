// ==========================================
// Binari Ammissibili - justification text
// ==========================================
// Composes the advisory reason string for each suggested track from the
// constraints and criteria that influenced it. Advisory text only: callers
// may rely on it being non-empty, never on its exact wording.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::domain::track::TrackData;
use crate::engine::candidate::{CandidateRecord, PlannedTrack};
use crate::i18n::{t, t_with_args};

/// Compose the reason text for one suggested track
pub fn build_reason(
    record: &CandidateRecord,
    train_length_m: i64,
    planned: &PlannedTrack,
    info: Option<&TrackData>,
    rule: &CategoryRuleConfig,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if rule.allow_no_platform && record.len_compl == 0 {
        parts.push(t("reason.no_platform_allowed"));
    } else {
        parts.push(t_with_args(
            "reason.length_ok",
            &[
                ("len", &record.len_compl.to_string()),
                ("train_len", &train_length_m.to_string()),
            ],
        ));
    }

    if record.cap_fun > 0 {
        parts.push(t_with_args(
            "reason.capacity_ok",
            &[
                ("cap", &record.cap_fun.to_string()),
                ("train_len", &train_length_m.to_string()),
            ],
        ));
    }

    if rule.allow_bis && record.suffix == "BIS" {
        parts.push(t("reason.bis_allowed"));
    }

    if let (Some(pref_min), Some(pref_max)) = (
        rule.preferred_min_track_number,
        rule.preferred_max_track_number,
    ) {
        let key = if record.priority_class == 0 {
            "reason.preferred_band"
        } else {
            "reason.support_band"
        };
        parts.push(t_with_args(
            key,
            &[
                ("min", &pref_min.to_string()),
                ("max", &pref_max.to_string()),
            ],
        ));
    }

    if let Some(planned_num) = planned.number {
        if record.number == Some(planned_num) && record.suffix != planned.suffix {
            parts.push(t("reason.same_number_variant"));
        } else if record.number.is_some() && record.proximity.is_finite() {
            let distance = record.proximity as i64;
            match distance {
                0 => parts.push(t("reason.same_number")),
                1 => parts.push(t("reason.adjacent")),
                n => parts.push(t_with_args("reason.distance", &[("n", &n.to_string())])),
            }
        } else if !record.proximity.is_finite() {
            parts.push(t("reason.number_not_comparable"));
        }
    }

    if record.similarity >= 2 {
        parts.push(t("reason.platform_identical"));
    } else if record.similarity == 1 {
        parts.push(t("reason.platform_profile"));
    }

    if let Some(info) = info {
        match info.profile() {
            (true, false) => parts.push(t("reason.high_platform")),
            (false, true) => parts.push(t("reason.low_platform")),
            (true, true) => parts.push(t("reason.high_low_platform")),
            (false, false) => {}
        }
    }

    if parts.is_empty() {
        parts.push(t("reason.all_constraints"));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(len_compl: i64, cap_fun: i64) -> CandidateRecord {
        CandidateRecord {
            name: "III".to_string(),
            source_name: "III".to_string(),
            priority_class: 0,
            proximity: 1.0,
            similarity: 0,
            same_number_bonus: 0.0,
            len_delta: 29,
            sort_num: 3.0,
            suffix_flag: 0,
            len_compl,
            cap_fun,
            number: Some(3),
            suffix: String::new(),
        }
    }

    #[test]
    fn test_reason_mentions_length_and_adjacency() {
        let planned = PlannedTrack {
            number: Some(4),
            suffix: String::new(),
            info: None,
        };
        let reason = build_reason(
            &record(449, 0),
            250,
            &planned,
            None,
            &CategoryRuleConfig::default(),
        );
        assert!(reason.contains("449"));
        assert!(reason.contains("250"));
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_reason_never_empty() {
        let rule = CategoryRuleConfig {
            allow_no_platform: true,
            ..CategoryRuleConfig::default()
        };
        let reason = build_reason(&record(0, 0), 100, &PlannedTrack::default(), None, &rule);
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_reason_capacity() {
        let reason = build_reason(
            &record(449, 500),
            250,
            &PlannedTrack::default(),
            None,
            &CategoryRuleConfig::default(),
        );
        assert!(reason.contains("500"));
    }
}
