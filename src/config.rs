use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the subtitle database, relative to the working
/// directory. Matches the layout the database is shipped in.
pub const DEFAULT_DB_PATH: &str = "data/eng_subtitles_database.db";

/// Optional config file looked up next to the binary's working directory.
pub const DEFAULT_CONFIG_PATH: &str = "subgrep.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database holding the `zipfiles` table.
    pub database_path: PathBuf,
    /// Lines of context shown on each side of a match.
    pub window_size: usize,
    /// Cap on how many records a scan loads. `None` scans everything.
    pub record_limit: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            window_size: 2,
            record_limit: None,
        }
    }
}

impl Config {
    /// Load configuration from an explicit YAML file, from `subgrep.yaml` in
    /// the working directory if present, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}
