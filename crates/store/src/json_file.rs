//! JSON-file backend: the whole scoreboard as one `<key>.json` array.
//!
//! Mirrors a key-value storage layout where one fixed key maps to the
//! serialized record list. Appends are read-modify-write through a sibling
//! temp file renamed over the target, so a failed write never truncates or
//! corrupts the existing list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tui_yatzy_types::{ScoreRecord, SCOREBOARD_KEY};

use crate::{ScoreStore, StoreError};

/// Durable score store rooted at a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store under `dir`, using the fixed scoreboard key as the file name.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SCOREBOARD_KEY}.json")),
        }
    }

    /// Full path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current list. A missing file is an empty scoreboard;
    /// unreadable or corrupt content is an error.
    fn load(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&data)?)
    }
}

impl ScoreStore for JsonFileStore {
    fn append(&mut self, record: ScoreRecord) -> Result<(), StoreError> {
        // Refuses to clobber a corrupt list: the load error propagates
        // before anything is written.
        let mut records = self.load()?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec(&records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        self.load()
    }
}
