use serde::{Deserialize, Serialize};

/// One row of the `zipfiles` table: a subtitle file name plus its
/// zip-compressed payload. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleRecord {
    pub id: i64,
    pub file_name: String,
    #[serde(skip)]
    pub payload: Vec<u8>,
}

/// Lightweight listing row — everything but the payload bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: i64,
    pub file_name: String,
    pub payload_size: i64,
}
