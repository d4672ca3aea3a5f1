//! Best-time persistence: one key-value entry per difficulty.
//!
//! Records live in a flat JSON object, e.g. `{"bestTime_Easy": "42"}`, with
//! decimal-text values. A missing or corrupt file, or a malformed value, is
//! treated as "no record" rather than an error.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Difficulty;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordsFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

#[derive(Debug)]
pub struct BestTimeStore {
    path: PathBuf,
    records: RecordsFile,
}

impl BestTimeStore {
    /// Open the store backed by the given file. Unreadable or unparsable
    /// contents start the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, records }
    }

    /// Open the store at its per-user default location.
    pub fn open_default() -> Self {
        Self::open(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best recorded completion time in seconds, if any.
    pub fn load(&self, difficulty: Difficulty) -> Option<u32> {
        self.records
            .entries
            .get(difficulty.storage_key())?
            .trim()
            .parse()
            .ok()
    }

    /// Record a completion time.
    ///
    /// Writes only when no record exists yet or `seconds` is strictly lower
    /// than the existing record, so the stored value never increases.
    pub fn save(&mut self, difficulty: Difficulty, seconds: u32) -> io::Result<()> {
        if let Some(best) = self.load(difficulty) {
            if seconds >= best {
                return Ok(());
            }
        }
        self.records
            .entries
            .insert(difficulty.storage_key().to_string(), seconds.to_string());
        self.write_back()
    }

    fn write_back(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, raw)
    }
}

fn default_path() -> PathBuf {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("memory-matrix").join("best_times.json")
}
