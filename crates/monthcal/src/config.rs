use std::{env, path::PathBuf};

use monthcal_core::storage::DEFAULT_EVENTS_KEY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the storage files (default: ".monthcal")
    pub data_dir: PathBuf,
    /// Storage key the events are saved under (default: "EVENTS")
    pub storage_key: String,
    /// Rows per day cell in the month grid, header included (default: 5)
    pub cell_height: u16,
    /// Columns per day cell in the month grid (default: 16)
    pub cell_width: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONTHCAL_DATA_DIR` - Storage directory (default: ".monthcal")
    /// - `MONTHCAL_STORAGE_KEY` - Storage key (default: "EVENTS")
    /// - `MONTHCAL_CELL_HEIGHT` - Day cell height in rows (default: 5)
    /// - `MONTHCAL_CELL_WIDTH` - Day cell width in columns (default: 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("MONTHCAL_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".monthcal")),
            storage_key: lookup("MONTHCAL_STORAGE_KEY")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENTS_KEY.to_string()),
            cell_height: lookup("MONTHCAL_CELL_HEIGHT")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v >= 3)
                .unwrap_or(5),
            cell_width: lookup("MONTHCAL_CELL_WIDTH")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v >= 4)
                .unwrap_or(16),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
