//! Score store module - append-only persistence for finished rounds
//!
//! The scoreboard is an ordered list of [`ScoreRecord`]s kept under a fixed
//! storage key. The round engine appends exactly one record per completed
//! round; the scoreboard view reads the whole list back. Both sides talk to
//! the [`ScoreStore`] trait, so the durable backend can be swapped without
//! touching game logic.
//!
//! # Implementations
//!
//! - [`JsonFileStore`]: the durable backend. Keeps the full list as a JSON
//!   array in `<key>.json` under a caller-chosen directory and replaces the
//!   file atomically on every append.
//! - [`MemoryScoreStore`]: `Vec`-backed, infallible. Used by tests and the
//!   batch simulator.
//!
//! # Failure model
//!
//! Append and read both surface typed [`StoreError`]s. A failed append never
//! leaves a partially written list on disk, and callers are expected to treat
//! store failures as advisory: game state must not roll back because a score
//! could not be persisted.

use thiserror::Error;
use tui_yatzy_types::ScoreRecord;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryScoreStore;

/// Error from a score store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only persistence for finished rounds.
///
/// `append` takes the record by value; ownership transfers to the store.
/// `read_all` returns the stored history oldest first, empty when nothing
/// has been stored yet.
pub trait ScoreStore {
    fn append(&mut self, record: ScoreRecord) -> Result<(), StoreError>;
    fn read_all(&self) -> Result<Vec<ScoreRecord>, StoreError>;
}
