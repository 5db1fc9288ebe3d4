// ==========================================
// Binari Ammissibili - CLI entry point
// ==========================================
// Computes admissible alternative tracks for the trains described in a
// request JSON file, against the SQLite dataset (or an inline
// tracks_override), and writes the response JSON.
//
// Usage:
//   binari-ammissibili <request.json> [db_path] [output.json]
// ==========================================

use binari_ammissibili::api::SuggestionApi;
use binari_ammissibili::db::default_db_path;
use binari_ammissibili::i18n::{self, t};
use binari_ammissibili::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    i18n::set_locale(&std::env::var("APP_LOCALE").unwrap_or_else(|_| "it".to_string()));

    tracing::info!("==================================================");
    tracing::info!("{} v{}", binari_ammissibili::APP_NAME, binari_ammissibili::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let request_path = args
        .next()
        .ok_or("usage: binari-ammissibili <request.json> [db_path] [output.json]")?;
    let db_path = args.next().unwrap_or_else(default_db_path);
    let output_path = args.next();

    tracing::info!("database: {}", db_path);
    tracing::info!("request: {}", request_path);

    let payload = std::fs::read_to_string(&request_path)
        .map_err(|e| format!("cannot read request file '{}': {}", request_path, e))?;
    // Tolerate a UTF-8 BOM left behind by Windows editors
    let payload = payload.trim_start_matches('\u{feff}');

    let api = SuggestionApi::new(&db_path)?;
    let response = api.suggestions_from_json(payload)?;

    for item in &response.items {
        println!(
            "Treno {} (len={}, cls={})",
            item.train.train_code,
            item.train.train_length_m,
            item.train.effective_category()
        );
        if let Some(planned) = item.train.planned_track.as_deref() {
            println!("Binario previsto: {}", planned);
        }
        if let Some(error) = &item.error {
            println!("ERRORE: {}", error);
        } else if item.alternatives.is_empty() {
            println!("{}", t("cli.no_alternatives"));
        } else {
            println!("{}", t("cli.alternatives_header"));
            for (i, alt) in item.alternatives.iter().enumerate() {
                let name = alt.track_name.as_deref().unwrap_or(&alt.track);
                println!("{}. {} [{}] - {}", i + 1, name, alt.track, alt.reason);
            }
        }
        println!();
    }

    let rendered = serde_json::to_string_pretty(&response)?;
    match output_path {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .map_err(|e| format!("cannot write output file '{}': {}", path, e))?;
            tracing::info!("response written to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
