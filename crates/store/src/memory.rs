//! In-memory backend for tests and simulation.

use tui_yatzy_types::ScoreRecord;

use crate::{ScoreStore, StoreError};

/// `Vec`-backed score store. Never fails.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    records: Vec<ScoreRecord>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records, oldest first.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&mut self, record: ScoreRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
