use crate::config::Config;
use crate::error::AppError;
use crate::store::Store;
use crate::subtitle;

/// Small SRT fixtures for local testing without the real database.
const SAMPLE_SUBTITLES: &[(i64, &str, &str)] = &[
    (
        1001,
        "Orbital Decay (2019)",
        "1\n00:00:10,000 --> 00:00:15,000\nTelemetry is gone. We're flying blind.\n\n\
         2\n00:00:16,000 --> 00:00:21,000\nThen we navigate the old way. By the stars.\n\n\
         3\n00:00:23,000 --> 00:00:28,000\nThe station won't hold orbit past morning.\n\n\
         4\n00:00:30,000 --> 00:00:35,000\nMorning is all we need.\n",
    ),
    (
        1002,
        "The Long Meridian (1987)",
        "1\n00:00:10,000 --> 00:00:15,000\nEvery map ends somewhere. This one ends here.\n\n\
         2\n00:00:16,000 --> 00:00:21,000\nYou said that at the last river too.\n\n\
         3\n00:00:23,000 --> 00:00:28,000\nAnd I was wrong then. Keep walking.\n",
    ),
    (
        1003,
        "Night Ferry (2003)",
        "1\n00:00:10,000 --> 00:00:15,000\nLast crossing leaves at midnight.\n\n\
         2\n00:00:16,000 --> 00:00:21,000\nThen we have an hour to find him.\n\n\
         3\n00:00:23,000 --> 00:00:28,000\nAn hour, in this fog? Good luck.\n\n\
         4\n00:00:30,000 --> 00:00:35,000\nLuck got me on this boat. It can get me off it.\n",
    ),
];

/// Create a sample database at the configured path.
pub fn seed(config: &Config) -> Result<(), AppError> {
    let db_path = &config.database_path;
    if db_path.exists() {
        return Err(AppError::Other(format!(
            "refusing to overwrite existing database at {}",
            db_path.display()
        )));
    }
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = Store::create(db_path)?;
    for (id, name, text) in SAMPLE_SUBTITLES {
        let payload = subtitle::compress(name, text).map_err(|e| AppError::Other(e.to_string()))?;
        store.insert_record(*id, name, &payload)?;
    }

    log::info!(
        "Sample database created with {} entries at {}",
        SAMPLE_SUBTITLES.len(),
        db_path.display()
    );
    println!(
        "Sample database created with {} subtitle entries in {}",
        SAMPLE_SUBTITLES.len(),
        db_path.display()
    );
    Ok(())
}
