// ==========================================
// Binari Ammissibili - repository layer
// ==========================================
// SQLite-backed data access: track dataset plus per-category rule and
// priority overrides. The engine never touches this layer directly; it
// receives snapshots and resolved configuration.
// ==========================================

pub mod config_repo;
pub mod error;
pub mod track_repo;

pub use config_repo::{CategoryRuleEntry, ConfigRepository, PriorityEntry};
pub use error::{RepositoryError, RepositoryResult};
pub use track_repo::TrackRepository;
