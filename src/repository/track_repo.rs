// ==========================================
// Binari Ammissibili - track dataset repository
// ==========================================
// Owns the tracks table: snapshot loads for the engine, admin upserts,
// JSON seeding and signal-code backfill.
// ==========================================

use crate::db::{configure_sqlite_connection, ensure_schema, open_sqlite_connection};
use crate::domain::track::{TrackData, TrackDataset};
use crate::engine::signals::{resolve_signal_code, DEFAULT_SIGNAL_CODE};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct TrackRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TrackRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Reuse an existing connection; re-applies the unified PRAGMA set
    /// (idempotent) and the schema bootstrap.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Number of tracks currently stored
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Load the full dataset as a point-in-time snapshot keyed by name
    pub fn load_dataset(&self) -> RepositoryResult<TrackDataset> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, signal_code, marciapiede_complessivo_m, marciapiede_alto_m,
                    marciapiede_basso_m, capacita_funzionale_m
             FROM tracks ORDER BY name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                TrackData {
                    signal_code: row.get::<_, Option<String>>(1)?,
                    marciapiede_complessivo_m: Some(row.get::<_, i64>(2)?),
                    marciapiede_alto_m: row.get::<_, i64>(3)?,
                    marciapiede_basso_m: row.get::<_, i64>(4)?,
                    capacita_funzionale_m: row.get::<_, Option<i64>>(5)?,
                },
            ))
        })?;

        let mut dataset = TrackDataset::new();
        for row in rows {
            let (name, data) = row?;
            dataset.insert(name, data);
        }
        Ok(dataset)
    }

    /// Insert or update one track by name
    ///
    /// A missing signal code is resolved from the static station map.
    pub fn upsert(&self, name: &str, data: &TrackData) -> RepositoryResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::ValidationError(
                "track name must not be empty".to_string(),
            ));
        }
        let signal_code = data
            .signal_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| resolve_signal_code(name));

        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO tracks (name, signal_code, marciapiede_complessivo_m,
                                 marciapiede_alto_m, marciapiede_basso_m, capacita_funzionale_m)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(name) DO UPDATE SET
               signal_code = ?2,
               marciapiede_complessivo_m = ?3,
               marciapiede_alto_m = ?4,
               marciapiede_basso_m = ?5,
               capacita_funzionale_m = ?6",
            params![
                name,
                signal_code,
                data.total_platform_m(),
                data.marciapiede_alto_m,
                data.marciapiede_basso_m,
                data.capacita_funzionale_m,
            ],
        )?;
        Ok(())
    }

    /// Delete one track by name; Ok(false) when it did not exist
    pub fn delete(&self, name: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM tracks WHERE name = ?1", params![name.trim()])?;
        Ok(affected > 0)
    }

    /// Seed the tracks table from a `{"binari": {...}}` JSON payload
    ///
    /// No-op when the table already has rows (returns 0). Entries that do
    /// not parse as track records are skipped with a warning. The historical
    /// capacity-field misspellings are accepted.
    pub fn seed_from_json(&self, payload: &serde_json::Value) -> RepositoryResult<usize> {
        if self.count()? > 0 {
            tracing::info!("tracks table already populated, seeding skipped");
            return Ok(0);
        }

        let binari = payload
            .get("binari")
            .and_then(|v| v.as_object())
            .ok_or_else(|| {
                RepositoryError::ValidationError(
                    "dataset file must contain a non-empty 'binari' object".to_string(),
                )
            })?;
        if binari.is_empty() {
            return Err(RepositoryError::ValidationError(
                "dataset file must contain a non-empty 'binari' object".to_string(),
            ));
        }

        let mut seeded = 0;
        for (name, info) in binari {
            let data: TrackData = match serde_json::from_value(info.clone()) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(track = name.as_str(), "unreadable track entry skipped: {}", e);
                    continue;
                }
            };
            self.upsert(name, &data)?;
            seeded += 1;
        }
        tracing::info!(count = seeded, "tracks seeded");
        Ok(seeded)
    }

    /// Backfill missing or placeholder signal codes from the station map
    pub fn apply_signal_code_defaults(&self) -> RepositoryResult<usize> {
        let names: Vec<String> = {
            let conn = self.get_conn()?;
            let mut stmt = conn.prepare(
                "SELECT name FROM tracks
                 WHERE signal_code IS NULL OR TRIM(signal_code) = '' OR signal_code = ?1",
            )?;
            let rows = stmt.query_map(params![DEFAULT_SIGNAL_CODE], |row| row.get(0))?;
            rows.collect::<Result<_, _>>()?
        };

        let mut updated = 0;
        for name in names {
            let desired = resolve_signal_code(&name);
            let conn = self.get_conn()?;
            let current: Option<Option<String>> = conn
                .query_row(
                    "SELECT signal_code FROM tracks WHERE name = ?1",
                    params![name],
                    |row| row.get(0),
                )
                .optional()?;
            if let Some(current) = current {
                if current.as_deref() != Some(desired.as_str()) {
                    conn.execute(
                        "UPDATE tracks SET signal_code = ?1 WHERE name = ?2",
                        params![desired, name],
                    )?;
                    updated += 1;
                }
            }
        }
        if updated > 0 {
            tracing::info!(count = updated, "signal codes backfilled");
        }
        Ok(updated)
    }
}
