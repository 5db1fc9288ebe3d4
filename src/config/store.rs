// ==========================================
// Binari Ammissibili - rule store seam
// ==========================================
// The engine consumes custom overrides through this read-only snapshot
// interface; the concrete store lives in the repository layer.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use std::collections::HashMap;
use std::error::Error;

/// Canonical store key for a category: trimmed and upper-cased, except the
/// literal `default` family key which stays lowercase.
pub fn store_key(category: &str) -> String {
    let key = category.trim().to_uppercase();
    if key == "DEFAULT" {
        "default".to_string()
    } else {
        key
    }
}

/// Read-only access to persisted per-category overrides
///
/// `None` means "no custom override": the caller falls back to the built-in
/// family default. Absence is the normal path, never an error.
pub trait RuleStore {
    /// Custom rule stored under the exact category key, if any
    fn category_rule(&self, category: &str) -> Result<Option<CategoryRuleConfig>, Box<dyn Error>>;

    /// Custom priority profile stored under the exact category key, if any
    fn priority_profile(&self, category: &str) -> Result<Option<PriorityProfile>, Box<dyn Error>>;
}

/// In-memory store, used by tests and ad-hoc embedding
#[derive(Debug, Default)]
pub struct InMemoryRuleStore {
    rules: HashMap<String, CategoryRuleConfig>,
    priorities: HashMap<String, PriorityProfile>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, category: &str, rule: CategoryRuleConfig) -> Self {
        self.rules.insert(store_key(category), rule);
        self
    }

    pub fn with_priority(mut self, category: &str, profile: PriorityProfile) -> Self {
        self.priorities.insert(store_key(category), profile);
        self
    }
}

impl RuleStore for InMemoryRuleStore {
    fn category_rule(&self, category: &str) -> Result<Option<CategoryRuleConfig>, Box<dyn Error>> {
        Ok(self.rules.get(category).cloned())
    }

    fn priority_profile(&self, category: &str) -> Result<Option<PriorityProfile>, Box<dyn Error>> {
        Ok(self.priorities.get(category).cloned())
    }
}
