use std::path::Path;

use crate::commands::subtitle_url;
use crate::config::Config;
use crate::error::AppError;
use crate::search::SearchEngine;
use crate::store::Store;
use crate::subtitle;

const PREVIEW_CHARS: usize = 200;

/// Print metadata for one subtitle record.
pub fn info(config: &Config, id: i64) -> Result<(), AppError> {
    let store = Store::open(&config.database_path)?;
    let record = store
        .record_by_id(id)?
        .ok_or_else(|| AppError::NotFound(format!("no subtitle with id {}", id)))?;

    let text = subtitle::decode(&record.payload)?;
    let blocks = subtitle::parse_blocks(&text);

    println!("Subtitle Information:");
    println!("ID: {}", record.id);
    println!("Name: {}", record.file_name);
    println!("URL: {}", subtitle_url(record.id));
    println!("Compressed size: {} bytes", record.payload.len());
    println!("Cues: {}", blocks.len());
    if let (Some(first), Some(last)) = (blocks.first(), blocks.last()) {
        println!("Runs: {} -> {}", first.start, last.end);
    }

    if let Some(preview) = preview(&text) {
        println!("\nPreview: {}", preview);
    }

    Ok(())
}

/// First `PREVIEW_CHARS` characters of the cleaned text, with an ellipsis
/// only when something was actually cut off.
fn preview(text: &str) -> Option<String> {
    let cleaned = subtitle::clean_text(text);
    if cleaned.is_empty() {
        return None;
    }
    let mut preview: String = cleaned.chars().take(PREVIEW_CHARS).collect();
    if cleaned.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    Some(preview)
}

/// Print the full decoded text of one subtitle record.
pub fn show(config: &Config, id: i64) -> Result<(), AppError> {
    let store = Store::open(&config.database_path)?;
    let engine = SearchEngine::new(store, config.window_size);
    let full = engine
        .full_text(id)?
        .ok_or_else(|| AppError::NotFound(format!("no subtitle with id {}", id)))?;

    println!("{} - {}\n", full.id, full.file_name);
    println!("{}", full.text);
    Ok(())
}

/// List stored records: id, name, compressed size.
pub fn list(config: &Config, limit: Option<i64>) -> Result<(), AppError> {
    let store = Store::open(&config.database_path)?;
    let summaries = store.summaries(limit.or(config.record_limit))?;
    let total = store.record_count()?;

    for summary in &summaries {
        println!(
            "{:>8}  {:>8} B  {}",
            summary.id, summary.payload_size, summary.file_name
        );
    }
    println!("\n{} of {} record(s)", summaries.len(), total);
    Ok(())
}

/// Write every decodable subtitle to `out_dir` as an `.srt` file.
/// Corrupt records are skipped, matching search behavior.
pub fn export(config: &Config, out_dir: &Path, limit: Option<i64>) -> Result<(), AppError> {
    let store = Store::open(&config.database_path)?;
    let records = store.all_records(limit.or(config.record_limit))?;

    std::fs::create_dir_all(out_dir)?;

    let mut written = 0usize;
    for record in records {
        let text = match subtitle::decode(&record.payload) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Skipping record {} ({}): {}", record.id, record.file_name, e);
                continue;
            }
        };

        // File names in the table can contain path separators, and distinct
        // records can share a name; the id prefix keeps outputs unique
        let safe_name = record.file_name.replace(['/', '\\'], "_");
        let path = out_dir.join(format!("{}_{}.srt", record.id, safe_name));
        std::fs::write(&path, text)?;
        written += 1;
    }

    log::info!("Exported {} subtitle file(s) to {}", written, out_dir.display());
    println!("Exported {} subtitle file(s) to {}", written, out_dir.display());
    Ok(())
}
