#[cfg(test)]
mod tests;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read, Write};
use std::sync::OnceLock;
use thiserror::Error;

/// A subtitle payload that cannot be expanded into text.
///
/// Every container-level failure collapses into this one kind: callers either
/// surface it ("unable to read this file") or skip the record during a scan.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CorruptPayload(String);

/// One SRT cue: a start/end timestamp pair and the dialogue shown between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleBlock {
    pub start: String,
    pub end: String,
    pub text: String,
}

// =========================================================================
// Decompression
// =========================================================================

/// Expand a zip-compressed payload into the raw subtitle bytes.
///
/// Payloads hold a single `.srt` member; only the first entry is read.
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>, CorruptPayload> {
    let mut archive = zip::ZipArchive::new(Cursor::new(payload))
        .map_err(|e| CorruptPayload(format!("not a valid zip container: {}", e)))?;

    if archive.len() == 0 {
        return Err(CorruptPayload("archive contains no files".to_string()));
    }

    let mut file = archive
        .by_index(0)
        .map_err(|e| CorruptPayload(format!("unreadable archive entry: {}", e)))?;

    let mut bytes = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut bytes)
        .map_err(|e| CorruptPayload(format!("truncated archive entry: {}", e)))?;

    Ok(bytes)
}

/// Decode subtitle bytes to text: UTF-8 when valid, Windows-1252 otherwise.
///
/// The source corpus stores SRT files Latin-1 encoded; Windows-1252 is the
/// conventional superset, so this never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Decompress and decode a payload in one step. Pure function of the payload.
pub fn decode(payload: &[u8]) -> Result<String, CorruptPayload> {
    Ok(decode_text(&decompress(payload)?))
}

/// Inverse of [`decompress`]: wrap subtitle text in a single-member zip.
/// Used by the sample-database seeder and round-trip tests.
pub fn compress(file_name: &str, text: &str) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        writer.start_file(format!("{}.srt", file_name), options)?;
        writer.write_all(text.as_bytes())?;
        writer.finish()?;
    }
    Ok(cursor.into_inner())
}

// =========================================================================
// SRT structure
// =========================================================================

fn timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})")
            .expect("valid timestamp pattern")
    })
}

/// Start timestamp of an SRT cue line (`HH:MM:SS,mmm --> HH:MM:SS,mmm`).
pub fn timestamp_of_line(line: &str) -> Option<String> {
    timestamp_re()
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Parse SRT text into ordered cue blocks.
///
/// Cue counters and blank separator lines are structural and dropped;
/// multi-line dialogue is joined with single spaces. Recomputed per request,
/// never cached.
pub fn parse_blocks(text: &str) -> Vec<SubtitleBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<SubtitleBlock> = None;

    for line in text.lines() {
        if let Some(caps) = timestamp_re().captures(line) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(SubtitleBlock {
                start: caps[1].to_string(),
                end: caps[2].to_string(),
                text: String::new(),
            });
        } else if let Some(mut block) = current.take() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                blocks.push(block);
            } else {
                if !block.text.is_empty() {
                    block.text.push(' ');
                }
                block.text.push_str(trimmed);
                current = Some(block);
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}

/// Strip SRT noise from subtitle text: cue timestamps, numeric counters,
/// HTML-ish tags, and runs of whitespace. Used for previews and reports.
pub fn clean_text(text: &str) -> String {
    static INDEX_RE: OnceLock<Regex> = OnceLock::new();
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    static WS_RE: OnceLock<Regex> = OnceLock::new();

    let index_re =
        INDEX_RE.get_or_init(|| Regex::new(r"(?m)^\d+\s*$").expect("valid index pattern"));
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
    let ws_re = WS_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

    let text = timestamp_re().replace_all(text, "");
    let text = index_re.replace_all(&text, "");
    let text = tag_re.replace_all(&text, "");
    ws_re.replace_all(&text, " ").trim().to_string()
}
