// ==========================================
// Binari Ammissibili - configuration layer
// ==========================================
// Per-category rule and priority configuration with built-in defaults and
// whole-record custom overrides (custom-or-default, never field-merged).
// ==========================================

pub mod category_rule;
pub mod priority_profile;
pub mod resolver;
pub mod store;

pub use category_rule::CategoryRuleConfig;
pub use priority_profile::{PriorityCriterion, PriorityProfile};
pub use resolver::{Effective, RuleResolver};
pub use store::{InMemoryRuleStore, RuleStore};
