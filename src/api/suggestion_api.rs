// ==========================================
// Binari Ammissibili - suggestion API
// ==========================================
// Wires the repositories and the orchestrator over one shared connection.
// Accepts the same payload shapes as the historical HTTP endpoint.
// ==========================================

use crate::api::error::ApiError;
use crate::domain::train::{SuggestionRequest, SuggestionResponse};
use crate::engine::orchestrator::SuggestionOrchestrator;
use crate::repository::config_repo::ConfigRepository;
use crate::repository::track_repo::TrackRepository;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// ==========================================
// SuggestionApi
// ==========================================
pub struct SuggestionApi {
    tracks: TrackRepository,
    orchestrator: SuggestionOrchestrator<ConfigRepository>,
}

impl SuggestionApi {
    /// Open (or create) the database at db_path and wire the engine
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// Build on an existing shared connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, ApiError> {
        let tracks = TrackRepository::from_connection(conn.clone())?;
        let config = Arc::new(ConfigRepository::from_connection(conn)?);
        Ok(Self {
            tracks,
            orchestrator: SuggestionOrchestrator::new(config),
        })
    }

    /// Compute suggestions for a parsed request
    ///
    /// The persisted dataset is loaded only when the request carries no
    /// `tracks_override`.
    pub fn suggestions(&self, request: SuggestionRequest) -> Result<SuggestionResponse, ApiError> {
        let (trains, tracks_override) = request.into_parts();
        let dataset = match tracks_override {
            Some(ds) => ds,
            None => self.tracks.load_dataset()?,
        };
        self.orchestrator
            .suggest_trains(&trains, &dataset)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))
    }

    /// Compute suggestions for a raw JSON payload
    pub fn suggestions_from_json(&self, payload: &str) -> Result<SuggestionResponse, ApiError> {
        let request: SuggestionRequest = serde_json::from_str(payload)
            .map_err(|e| ApiError::InvalidInput(format!("unreadable request payload: {}", e)))?;
        self.suggestions(request)
    }

    /// Snapshot access for callers that render the dataset
    pub fn tracks(&self) -> &TrackRepository {
        &self.tracks
    }
}
