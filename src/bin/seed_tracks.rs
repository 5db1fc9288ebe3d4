// Small dev utility: create the schema and seed the tracks table from a
// `{"binari": {...}}` JSON dataset file.
//
// Usage:
//   cargo run --bin seed_tracks -- [dataset.json] [db_path]
//
// Seeding is skipped when the table already has rows; signal codes missing
// from the dataset are backfilled from the static station map.

use binari_ammissibili::db::default_db_path;
use binari_ammissibili::logging;
use binari_ammissibili::repository::TrackRepository;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let dataset_path = args.next().unwrap_or_else(|| "data/tracks.json".to_string());
    let db_path = args.next().unwrap_or_else(default_db_path);

    tracing::info!("dataset: {}", dataset_path);
    tracing::info!("database: {}", db_path);

    let raw = std::fs::read_to_string(&dataset_path)
        .map_err(|e| format!("cannot read dataset file '{}': {}", dataset_path, e))?;
    let payload: serde_json::Value = serde_json::from_str(raw.trim_start_matches('\u{feff}'))
        .map_err(|e| format!("invalid JSON in dataset file '{}': {}", dataset_path, e))?;

    let repo = TrackRepository::new(&db_path)?;
    let seeded = repo.seed_from_json(&payload)?;
    let backfilled = repo.apply_signal_code_defaults()?;

    println!("seeded={} signal_codes_backfilled={}", seeded, backfilled);
    Ok(())
}
