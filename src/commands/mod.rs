mod records;
mod search;
mod seed;

pub use records::{export, info, list, show};
pub use search::search;
pub use seed::seed;

/// Link back to the source of a subtitle record, keyed by its id.
pub fn subtitle_url(id: i64) -> String {
    format!("https://www.opensubtitles.org/en/subtitles/{}", id)
}
