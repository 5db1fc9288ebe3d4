// ==========================================
// Binari Ammissibili - domain layer
// ==========================================
// Entities and types shared by the engine, configuration and repositories.
// ==========================================

pub mod track;
pub mod train;
pub mod types;

pub use track::{TrackData, TrackDataset};
pub use train::{
    SuggestedTrack, SuggestionRequest, SuggestionResponse, SuggestionResult, TrainRequest,
};
pub use types::{CategoryKey, CriterionKey};
