use chrono::Local;
use serde::Serialize;

use crate::commands::subtitle_url;
use crate::config::Config;
use crate::error::AppError;
use crate::search::{MatchResult, SearchEngine};
use crate::store::Store;

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    window: usize,
    total: usize,
    results: &'a [MatchResult],
}

/// Scan every stored subtitle for `query` and print matches with context.
pub fn search(
    config: &Config,
    query: &str,
    window: Option<usize>,
    case_sensitive: bool,
    limit: Option<i64>,
    save: bool,
) -> Result<(), AppError> {
    let window = window.unwrap_or(config.window_size);
    let limit = limit.or(config.record_limit);

    log::info!(
        "Searching for '{}' (window={}, case_sensitive={})",
        query,
        window,
        case_sensitive
    );

    let store = Store::open(&config.database_path)?;
    let engine = SearchEngine::new(store, window);
    let results = engine.search(query, case_sensitive, limit)?;

    if results.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    for result in &results {
        println!("\n{}", "-".repeat(50));
        println!("ID: {} - {}", result.record_id, result.file_name);
        println!("URL: {}", subtitle_url(result.record_id));
        if let Some(ref timestamp) = result.timestamp {
            println!("At: {} (line {})", timestamp, result.line_index);
        } else {
            println!("At: line {}", result.line_index);
        }
        println!();
        let first = result.line_index.saturating_sub(window);
        for (offset, line) in result.context.iter().enumerate() {
            let marker = if first + offset == result.line_index {
                ">"
            } else {
                " "
            };
            println!("  {} {}", marker, line);
        }
    }
    println!("\n{} match(es)", results.len());

    if save {
        let report = SearchReport {
            query,
            window,
            total: results.len(),
            results: &results,
        };
        let file_name = format!(
            "search_results_{}.json",
            Local::now().format("%Y%m%d-%H%M%S")
        );
        std::fs::write(&file_name, serde_json::to_string_pretty(&report)?)?;
        println!("Saved search results to {}", file_name);
    }

    Ok(())
}
