// ==========================================
// SQLite connection initialization
// ==========================================
// Goals:
// - unify PRAGMA behavior across every Connection::open, so foreign keys
//   are not enabled in some modules and disabled in others
// - unify busy_timeout to reduce spurious busy errors under concurrent writes
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set to a SQLite connection
///
/// Notes:
/// - foreign_keys must be enabled per connection
/// - busy_timeout must be configured per connection
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection and apply the unified configuration
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the application schema if missing (idempotent)
///
/// Table shapes follow the production dataset: tracks keyed by name,
/// category rules and priority profiles keyed by category. Deny lists and
/// criteria are stored as JSON text columns.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tracks (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL UNIQUE,
          signal_code TEXT,
          marciapiede_complessivo_m INTEGER NOT NULL DEFAULT 0,
          marciapiede_alto_m INTEGER NOT NULL DEFAULT 0,
          marciapiede_basso_m INTEGER NOT NULL DEFAULT 0,
          capacita_funzionale_m INTEGER
        );

        CREATE TABLE IF NOT EXISTS category_rules (
          category TEXT PRIMARY KEY,
          allow_bis INTEGER NOT NULL DEFAULT 0,
          allow_no_platform INTEGER NOT NULL DEFAULT 0,
          min_track_number INTEGER,
          max_track_number INTEGER,
          preferred_min_track_number INTEGER,
          preferred_max_track_number INTEGER,
          deny_track_names TEXT NOT NULL DEFAULT '[]',
          deny_track_patterns TEXT NOT NULL DEFAULT '[]',
          deny_track_numbers TEXT NOT NULL DEFAULT '[]',
          created_at TEXT NOT NULL DEFAULT (datetime('now')),
          updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS category_priority_configs (
          category TEXT PRIMARY KEY,
          criteria TEXT NOT NULL,
          same_number_bonus REAL NOT NULL DEFAULT -1.0,
          created_at TEXT NOT NULL DEFAULT (datetime('now')),
          updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_tracks_name ON tracks(name);
        "#,
    )?;
    Ok(())
}

/// Default database path: <user data dir>/binari-ammissibili/binari.db,
/// falling back to the current directory when no data dir is available.
pub fn default_db_path() -> String {
    let base: PathBuf = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("binari-ammissibili");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!("cannot create data dir {}: {}", dir.display(), e);
        return "binari.db".to_string();
    }
    dir.join("binari.db").to_string_lossy().into_owned()
}
