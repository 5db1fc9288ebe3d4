// ==========================================
// Repository integration tests
// ==========================================
// Scope: SQLite-backed track dataset and category configuration stores,
// including the resolver behavior on top of the persisted overrides.
// ==========================================

use binari_ammissibili::config::{
    CategoryRuleConfig, PriorityCriterion, PriorityProfile, RuleResolver,
};
use binari_ammissibili::domain::track::TrackData;
use binari_ammissibili::domain::types::{CategoryKey, CriterionKey};
use binari_ammissibili::repository::{ConfigRepository, TrackRepository};
use std::collections::BTreeSet;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Temporary database file; keep the handle alive for the test's duration
fn test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().expect("cannot create temp db");
    let db_path = temp_file.path().to_str().unwrap().to_string();
    (temp_file, db_path)
}

// ==========================================
// Track repository
// ==========================================

#[test]
fn test_seed_and_load_round_trip() {
    let (_file, db_path) = test_db();
    let repo = TrackRepository::new(&db_path).unwrap();

    let payload = serde_json::json!({
        "binari": {
            "III": {"marciapiede_complessivo_m": 449, "marciapiede_alto_m": 449},
            "V BIS": {"marciapiede_complessivo_m": 0, "capacita_funzioanle_m": 405},
            "XIV BIS": {"marciapiede_complessivo_m": 0, "capacita_funzionle_m": 380}
        }
    });
    let seeded = repo.seed_from_json(&payload).unwrap();
    assert_eq!(seeded, 3);

    let dataset = repo.load_dataset().unwrap();
    assert_eq!(dataset.len(), 3);
    // both historical misspellings of the capacity field are honored
    assert_eq!(dataset["V BIS"].functional_capacity_m(), 405);
    assert_eq!(dataset["XIV BIS"].functional_capacity_m(), 380);
    // signal codes resolved from the station map during seeding
    assert_eq!(dataset["III"].signal_code.as_deref(), Some("103"));

    // a second seed run is a no-op
    assert_eq!(repo.seed_from_json(&payload).unwrap(), 0);
}

#[test]
fn test_upsert_and_delete_track() {
    let (_file, db_path) = test_db();
    let repo = TrackRepository::new(&db_path).unwrap();

    let data = TrackData {
        marciapiede_complessivo_m: Some(400),
        marciapiede_alto_m: 400,
        marciapiede_basso_m: 0,
        capacita_funzionale_m: None,
        signal_code: None,
    };
    repo.upsert("VII", &data).unwrap();
    assert_eq!(repo.count().unwrap(), 1);

    // update in place
    let longer = TrackData {
        marciapiede_complessivo_m: Some(460),
        ..data
    };
    repo.upsert("VII", &longer).unwrap();
    let dataset = repo.load_dataset().unwrap();
    assert_eq!(dataset["VII"].total_platform_m(), 460);

    assert!(repo.delete("VII").unwrap());
    assert!(!repo.delete("VII").unwrap());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn test_empty_seed_payload_is_rejected() {
    let (_file, db_path) = test_db();
    let repo = TrackRepository::new(&db_path).unwrap();
    let err = repo.seed_from_json(&serde_json::json!({"binari": {}})).unwrap_err();
    assert!(err.to_string().contains("binari"));
}

// ==========================================
// Config repository + resolver
// ==========================================

#[test]
fn test_rule_override_round_trip() {
    let (_file, db_path) = test_db();
    let repo = Arc::new(ConfigRepository::new(&db_path).unwrap());
    let resolver = RuleResolver::new(repo.clone());

    // no override: built-in LH default, twice (idempotent)
    let before = resolver.resolve_rule("IC");
    assert!(!before.is_custom());
    assert_eq!(before.get(), &CategoryRuleConfig::builtin(CategoryKey::Lh));
    assert_eq!(resolver.resolve_rule("IC").get(), before.get());

    // custom override for the raw category, whole record
    let custom = CategoryRuleConfig {
        allow_bis: true,
        deny_track_numbers: BTreeSet::from([7]),
        ..CategoryRuleConfig::default()
    };
    repo.upsert_rule("IC", &custom).unwrap();

    let after = resolver.resolve_rule("IC");
    assert!(after.is_custom());
    assert_eq!(after.get(), &custom);
    // the override does not leak to other LH members
    assert!(!resolver.resolve_rule("EC").is_custom());

    // delete restores the built-in default
    assert!(repo.delete_rule("IC").unwrap());
    let restored = resolver.resolve_rule("IC");
    assert!(!restored.is_custom());
    assert_eq!(restored.get(), &CategoryRuleConfig::builtin(CategoryKey::Lh));
}

#[test]
fn test_family_override_applies_to_members() {
    let (_file, db_path) = test_db();
    let repo = Arc::new(ConfigRepository::new(&db_path).unwrap());
    let resolver = RuleResolver::new(repo.clone());

    let custom = CategoryRuleConfig {
        max_track_number: Some(10),
        ..CategoryRuleConfig::builtin(CategoryKey::Lh)
    };
    repo.upsert_rule("LH", &custom).unwrap();

    let resolved = resolver.resolve_rule("FR");
    assert!(resolved.is_custom());
    assert_eq!(resolved.get().max_track_number, Some(10));
}

#[test]
fn test_priority_override_round_trip() {
    let (_file, db_path) = test_db();
    let repo = Arc::new(ConfigRepository::new(&db_path).unwrap());
    let resolver = RuleResolver::new(repo.clone());

    let custom = PriorityProfile {
        criteria: vec![
            PriorityCriterion::new(CriterionKey::LengthDelta),
            PriorityCriterion {
                key: CriterionKey::TrackNumber,
                weight: 2.0,
                direction: -1.0,
            },
        ],
        same_number_bonus: 0.5,
    };
    repo.upsert_priority("REG", &custom).unwrap();

    let resolved = resolver.resolve_priority("REG");
    assert!(resolved.is_custom());
    assert_eq!(resolved.get(), &custom);

    assert!(repo.delete_priority("REG").unwrap());
    let restored = resolver.resolve_priority("REG");
    assert!(!restored.is_custom());
    assert_eq!(restored.get(), &PriorityProfile::builtin(CategoryKey::Default));
}

#[test]
fn test_listing_reports_provenance() {
    let (_file, db_path) = test_db();
    let repo = ConfigRepository::new(&db_path).unwrap();

    repo.upsert_rule("PRM", &CategoryRuleConfig::default()).unwrap();

    let entries = repo.list_rule_entries().unwrap();
    // built-in families are always listed
    for family in ["default", "INV", "PRM", "ES*", "LH"] {
        assert!(entries.iter().any(|e| e.category == family), "{} missing", family);
    }
    let prm = entries.iter().find(|e| e.category == "PRM").unwrap();
    assert!(prm.is_custom);
    let inv = entries.iter().find(|e| e.category == "INV").unwrap();
    assert!(!inv.is_custom);
    assert!(inv.rule.allow_bis);
}

// ==========================================
// Shared connection wiring
// ==========================================

#[test]
fn test_shared_connection_between_repositories() {
    let (_file, db_path) = test_db();
    let conn = binari_ammissibili::db::open_sqlite_connection(&db_path).unwrap();
    let shared = Arc::new(std::sync::Mutex::new(conn));

    let tracks = TrackRepository::from_connection(shared.clone()).unwrap();
    let config = ConfigRepository::from_connection(shared).unwrap();

    tracks
        .upsert(
            "IX",
            &TrackData {
                marciapiede_complessivo_m: Some(436),
                marciapiede_alto_m: 436,
                marciapiede_basso_m: 0,
                capacita_funzionale_m: None,
                signal_code: None,
            },
        )
        .unwrap();
    config.upsert_rule("REG", &CategoryRuleConfig::default()).unwrap();

    assert_eq!(tracks.count().unwrap(), 1);
    assert!(config.get_rule("REG").unwrap().is_some());
}
