// ==========================================
// Binari Ammissibili - effective rule/priority resolution
// ==========================================
// Effective value = custom override if present, else built-in family
// default. Whole-record resolution, once per category per request; the
// stored defaults are never mutated.
// ==========================================

use crate::config::category_rule::CategoryRuleConfig;
use crate::config::priority_profile::PriorityProfile;
use crate::config::store::{store_key, RuleStore};
use crate::domain::types::CategoryKey;
use std::sync::Arc;

/// Resolved configuration, tagged with its provenance
#[derive(Debug, Clone, PartialEq)]
pub enum Effective<T> {
    Custom(T),
    Default(T),
}

impl<T> Effective<T> {
    pub fn get(&self) -> &T {
        match self {
            Effective::Custom(value) => value,
            Effective::Default(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Effective::Custom(value) => value,
            Effective::Default(value) => value,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Effective::Custom(_))
    }
}

// ==========================================
// RuleResolver
// ==========================================
pub struct RuleResolver<S>
where
    S: RuleStore,
{
    store: Arc<S>,
}

impl<S> RuleResolver<S>
where
    S: RuleStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Effective admissibility rule for a category
    ///
    /// Lookup order: custom override under the raw category, custom override
    /// under the family key, built-in family default. Unknown categories and
    /// store read failures resolve to the default; this never errors.
    pub fn resolve_rule(&self, category: &str) -> Effective<CategoryRuleConfig> {
        let raw = store_key(category);
        let family = CategoryKey::normalize(category);

        if let Some(rule) = self.lookup_rule(&raw) {
            return Effective::Custom(rule);
        }
        if family.storage_key() != raw {
            if let Some(rule) = self.lookup_rule(family.storage_key()) {
                return Effective::Custom(rule);
            }
        }
        Effective::Default(CategoryRuleConfig::builtin(family))
    }

    /// Effective priority profile for a category, same lookup order
    pub fn resolve_priority(&self, category: &str) -> Effective<PriorityProfile> {
        let raw = store_key(category);
        let family = CategoryKey::normalize(category);

        if let Some(profile) = self.lookup_priority(&raw) {
            return Effective::Custom(profile);
        }
        if family.storage_key() != raw {
            if let Some(profile) = self.lookup_priority(family.storage_key()) {
                return Effective::Custom(profile);
            }
        }
        Effective::Default(PriorityProfile::builtin(family))
    }

    fn lookup_rule(&self, key: &str) -> Option<CategoryRuleConfig> {
        match self.store.category_rule(key) {
            Ok(rule) => rule,
            Err(e) => {
                tracing::warn!(category = key, "rule store read failed: {}", e);
                None
            }
        }
    }

    fn lookup_priority(&self, key: &str) -> Option<PriorityProfile> {
        match self.store.priority_profile(key) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(category = key, "priority store read failed: {}", e);
                None
            }
        }
    }
}
