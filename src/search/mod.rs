
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::Store;
use crate::subtitle;

/// One query hit: the matching line, its context window, and the nearest
/// preceding cue timestamp. Produced per query and discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub record_id: i64,
    pub file_name: String,
    pub line_index: usize,
    pub line: String,
    pub timestamp: Option<String>,
    pub context: Vec<String>,
}

/// Full decoded text of one subtitle file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullSubtitle {
    pub id: i64,
    pub file_name: String,
    pub text: String,
}

// =========================================================================
// Matcher
// =========================================================================

/// Line indices where `query` appears as a substring, ascending.
///
/// Lazy and restartable: call again for a fresh pass. An empty or
/// whitespace-only query matches nothing; otherwise the query is matched
/// verbatim, surrounding whitespace included.
pub fn match_line_indices<'a>(
    lines: &'a [&'a str],
    query: &str,
    case_sensitive: bool,
) -> impl Iterator<Item = usize> + 'a {
    let blank = query.trim().is_empty();
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    lines.iter().enumerate().filter_map(move |(index, line)| {
        if blank {
            return None;
        }
        let hit = if case_sensitive {
            line.contains(&needle)
        } else {
            line.to_lowercase().contains(&needle)
        };
        hit.then_some(index)
    })
}

/// Slice of lines `[index-window, index+window]` clipped to text bounds.
/// At most `2*window + 1` lines.
pub fn context_window<'a>(lines: &'a [&'a str], index: usize, window: usize) -> &'a [&'a str] {
    if lines.is_empty() || index >= lines.len() {
        return &[];
    }
    let start = index.saturating_sub(window);
    let end = (index + window).min(lines.len() - 1);
    &lines[start..=end]
}

/// Start timestamp of the nearest cue line at or before `index`.
pub fn nearest_timestamp(lines: &[&str], index: usize) -> Option<String> {
    lines
        .iter()
        .take(index + 1)
        .rev()
        .find_map(|line| subtitle::timestamp_of_line(line))
}

// =========================================================================
// Engine
// =========================================================================

/// Stateless request/response pipeline: fetch records, decompress, scan,
/// slice context. Nothing is cached between calls.
pub struct SearchEngine {
    store: Store,
    window: usize,
}

impl SearchEngine {
    pub fn new(store: Store, window: usize) -> Self {
        Self { store, window }
    }

    /// Scan every record for `query` and collect matches in record order.
    ///
    /// Records with corrupt payloads are logged and skipped; the scan
    /// continues. Store failures abort the request.
    pub fn search(
        &self,
        query: &str,
        case_sensitive: bool,
        limit: Option<i64>,
    ) -> Result<Vec<MatchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records = self.store.all_records(limit)?;
        let mut results = Vec::new();

        for record in records {
            let text = match subtitle::decode(&record.payload) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!(
                        "Skipping record {} ({}): {}",
                        record.id,
                        record.file_name,
                        e
                    );
                    continue;
                }
            };

            let lines: Vec<&str> = text.lines().collect();
            for index in match_line_indices(&lines, query, case_sensitive) {
                results.push(MatchResult {
                    record_id: record.id,
                    file_name: record.file_name.clone(),
                    line_index: index,
                    line: lines[index].to_string(),
                    timestamp: nearest_timestamp(&lines, index),
                    context: context_window(&lines, index, self.window)
                        .iter()
                        .map(|line| line.to_string())
                        .collect(),
                });
            }
        }

        Ok(results)
    }

    /// Retrieve the full decoded text of one record.
    pub fn full_text(&self, id: i64) -> Result<Option<FullSubtitle>, crate::error::AppError> {
        let Some(record) = self.store.record_by_id(id)? else {
            return Ok(None);
        };
        let text = subtitle::decode(&record.payload)?;
        Ok(Some(FullSubtitle {
            id: record.id,
            file_name: record.file_name,
            text,
        }))
    }
}
