// ==========================================
// Binari Ammissibili - engine layer
// ==========================================
// Admissibility and ranking over in-memory snapshots. Pure computation:
// no storage access, no shared mutable state between invocations, and
// every decision carries a human-readable reason.
// ==========================================

pub mod admissibility;
pub mod candidate;
pub mod criteria;
pub mod orchestrator;
pub mod ranking;
pub mod reason;
pub mod selector;
pub mod signals;
pub mod track_parser;

pub use admissibility::AdmissibilityFilter;
pub use candidate::{CandidateRecord, PlannedTrack, TrackMetadata};
pub use criteria::CriterionEvaluator;
pub use orchestrator::{SuggestionError, SuggestionOrchestrator};
pub use ranking::Ranker;
pub use selector::{SelectionError, TrackSelector};
pub use track_parser::{parse_track_name, ParsedTrackName};
