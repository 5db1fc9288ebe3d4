// ==========================================
// Binari Ammissibili - core library
// ==========================================
// Suggests admissible alternative tracks for trains, given platform
// constraints and per-category rule/priority configuration.
// Stack: Rust + SQLite
// ==========================================

// Initialize the i18n system (operator-facing strings, Italian default)
rust_i18n::i18n!("locales", fallback = "it");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Configuration layer - category rules and priority profiles
pub mod config;

// Engine layer - admissibility and ranking
pub mod engine;

// Repository layer - data access
pub mod repository;

// Database infrastructure (connection init / unified PRAGMA)
pub mod db;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - boundary interface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{CategoryKey, CriterionKey};

// Domain entities
pub use domain::{
    SuggestedTrack, SuggestionRequest, SuggestionResponse, SuggestionResult, TrackData,
    TrackDataset, TrainRequest,
};

// Configuration
pub use config::{
    CategoryRuleConfig, Effective, InMemoryRuleStore, PriorityCriterion, PriorityProfile,
    RuleResolver, RuleStore,
};

// Engines
pub use engine::{
    AdmissibilityFilter, CriterionEvaluator, Ranker, SuggestionOrchestrator, TrackSelector,
};

// API
pub use api::SuggestionApi;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Binari Ammissibili";

// Maximum number of suggestions returned per train
pub const MAX_SUGGESTIONS: usize = 7;
