// ==========================================
// Binari Ammissibili - API layer
// ==========================================
// Boundary between callers (CLI, embedding applications) and the engine:
// payload parsing, dataset snapshot loading, error translation.
// ==========================================

pub mod error;
pub mod suggestion_api;

pub use error::ApiError;
pub use suggestion_api::SuggestionApi;
