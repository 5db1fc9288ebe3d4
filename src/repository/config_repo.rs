// ==========================================
// Binari Ammissibili - category configuration repository
// ==========================================
// Owns the category_rules and category_priority_configs tables. Overrides
// are whole records: a row either exists (custom) or it does not (built-in
// default applies). Deny lists and criteria are JSON text columns.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use crate::config::store::{store_key, RuleStore};
use crate::db::{configure_sqlite_connection, ensure_schema, open_sqlite_connection};
use crate::domain::types::CategoryKey;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Listing entry for the admin surface: effective rule plus provenance
#[derive(Debug, Clone)]
pub struct CategoryRuleEntry {
    pub category: String,
    pub rule: CategoryRuleConfig,
    pub is_custom: bool,
}

/// Listing entry for priority profiles
#[derive(Debug, Clone)]
pub struct PriorityEntry {
    pub category: String,
    pub config: PriorityProfile,
    pub is_custom: bool,
}

pub struct ConfigRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Reuse an existing connection; re-applies PRAGMA and schema bootstrap
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Category rules
    // ==========================================

    fn rule_from_row(row: &Row<'_>) -> rusqlite::Result<CategoryRuleConfig> {
        let deny_names: String = row.get(6)?;
        let deny_patterns: String = row.get(7)?;
        let deny_numbers: String = row.get(8)?;
        Ok(CategoryRuleConfig {
            allow_bis: row.get::<_, i64>(0)? != 0,
            allow_no_platform: row.get::<_, i64>(1)? != 0,
            min_track_number: row.get(2)?,
            max_track_number: row.get(3)?,
            preferred_min_track_number: row.get(4)?,
            preferred_max_track_number: row.get(5)?,
            deny_track_names: serde_json::from_str::<BTreeSet<String>>(&deny_names)
                .unwrap_or_default(),
            deny_track_patterns: serde_json::from_str::<Vec<String>>(&deny_patterns)
                .unwrap_or_default(),
            deny_track_numbers: serde_json::from_str::<BTreeSet<i64>>(&deny_numbers)
                .unwrap_or_default(),
        })
    }

    /// Custom rule stored for a category, if any
    pub fn get_rule(&self, category: &str) -> RepositoryResult<Option<CategoryRuleConfig>> {
        let key = store_key(category);
        let conn = self.get_conn()?;
        let rule = conn
            .query_row(
                "SELECT allow_bis, allow_no_platform, min_track_number, max_track_number,
                        preferred_min_track_number, preferred_max_track_number,
                        deny_track_names, deny_track_patterns, deny_track_numbers
                 FROM category_rules WHERE category = ?1",
                params![key],
                |row| Self::rule_from_row(row),
            )
            .optional()?;
        Ok(rule)
    }

    /// Create or replace the custom rule for a category (whole record)
    pub fn upsert_rule(&self, category: &str, rule: &CategoryRuleConfig) -> RepositoryResult<()> {
        let key = store_key(category);
        if key.is_empty() {
            return Err(RepositoryError::ValidationError(
                "category must not be empty".to_string(),
            ));
        }
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO category_rules (category, allow_bis, allow_no_platform,
                min_track_number, max_track_number,
                preferred_min_track_number, preferred_max_track_number,
                deny_track_names, deny_track_patterns, deny_track_numbers,
                created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
             ON CONFLICT(category) DO UPDATE SET
               allow_bis = ?2, allow_no_platform = ?3,
               min_track_number = ?4, max_track_number = ?5,
               preferred_min_track_number = ?6, preferred_max_track_number = ?7,
               deny_track_names = ?8, deny_track_patterns = ?9,
               deny_track_numbers = ?10, updated_at = ?11",
            params![
                key,
                rule.allow_bis as i64,
                rule.allow_no_platform as i64,
                rule.min_track_number,
                rule.max_track_number,
                rule.preferred_min_track_number,
                rule.preferred_max_track_number,
                serde_json::to_string(&rule.deny_track_names)?,
                serde_json::to_string(&rule.deny_track_patterns)?,
                serde_json::to_string(&rule.deny_track_numbers)?,
                now,
            ],
        )?;
        Ok(())
    }

    /// Remove the custom rule; the built-in default applies afterwards
    pub fn delete_rule(&self, category: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM category_rules WHERE category = ?1",
            params![store_key(category)],
        )?;
        Ok(affected > 0)
    }

    /// All known categories with their effective rule and provenance
    pub fn list_rule_entries(&self) -> RepositoryResult<Vec<CategoryRuleEntry>> {
        let mut entries = Vec::new();
        for category in self.known_categories()? {
            let custom = self.get_rule(&category)?;
            let is_custom = custom.is_some();
            let rule = custom
                .unwrap_or_else(|| CategoryRuleConfig::builtin(CategoryKey::normalize(&category)));
            entries.push(CategoryRuleEntry {
                category,
                rule,
                is_custom,
            });
        }
        Ok(entries)
    }

    // ==========================================
    // Priority profiles
    // ==========================================

    /// Custom priority profile stored for a category, if any
    pub fn get_priority(&self, category: &str) -> RepositoryResult<Option<PriorityProfile>> {
        let key = store_key(category);
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                "SELECT criteria, same_number_bonus
                 FROM category_priority_configs WHERE category = ?1",
                params![key],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, f64>(1)?,
                    ))
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((criteria_json, same_number_bonus)) => {
                let criteria = serde_json::from_str(&criteria_json)?;
                Ok(Some(PriorityProfile {
                    criteria,
                    same_number_bonus,
                }))
            }
        }
    }

    /// Create or replace the custom priority profile (whole record)
    pub fn upsert_priority(
        &self,
        category: &str,
        profile: &PriorityProfile,
    ) -> RepositoryResult<()> {
        let key = store_key(category);
        if key.is_empty() {
            return Err(RepositoryError::ValidationError(
                "category must not be empty".to_string(),
            ));
        }
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO category_priority_configs
                (category, criteria, same_number_bonus, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             ON CONFLICT(category) DO UPDATE SET
               criteria = ?2, same_number_bonus = ?3, updated_at = ?4",
            params![
                key,
                serde_json::to_string(&profile.criteria)?,
                profile.same_number_bonus,
                now,
            ],
        )?;
        Ok(())
    }

    /// Remove the custom profile; the built-in default applies afterwards
    pub fn delete_priority(&self, category: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM category_priority_configs WHERE category = ?1",
            params![store_key(category)],
        )?;
        Ok(affected > 0)
    }

    /// All known categories with their effective profile and provenance
    pub fn list_priority_entries(&self) -> RepositoryResult<Vec<PriorityEntry>> {
        let mut entries = Vec::new();
        for category in self.known_categories()? {
            let custom = self.get_priority(&category)?;
            let is_custom = custom.is_some();
            let config = custom
                .unwrap_or_else(|| PriorityProfile::builtin(CategoryKey::normalize(&category)));
            entries.push(PriorityEntry {
                category,
                config,
                is_custom,
            });
        }
        Ok(entries)
    }

    /// Union of the categories present in either table and the built-in
    /// family keys, sorted
    fn known_categories(&self) -> RepositoryResult<Vec<String>> {
        let mut categories: BTreeSet<String> = [
            CategoryKey::Default,
            CategoryKey::Inv,
            CategoryKey::Prm,
            CategoryKey::EsStar,
            CategoryKey::Lh,
        ]
        .iter()
        .map(|k| k.storage_key().to_string())
        .collect();

        let conn = self.get_conn()?;
        for table in ["category_rules", "category_priority_configs"] {
            let mut stmt = conn.prepare(&format!("SELECT category FROM {}", table))?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            for row in rows {
                categories.insert(row?);
            }
        }
        Ok(categories.into_iter().collect())
    }
}

// The orchestrator reads overrides through this seam; lookups are by exact
// store key, normalization happens in the resolver.
impl RuleStore for ConfigRepository {
    fn category_rule(
        &self,
        category: &str,
    ) -> Result<Option<CategoryRuleConfig>, Box<dyn std::error::Error>> {
        Ok(self.get_rule(category)?)
    }

    fn priority_profile(
        &self,
        category: &str,
    ) -> Result<Option<PriorityProfile>, Box<dyn std::error::Error>> {
        Ok(self.get_priority(category)?)
    }
}
