//! TUI Yatzy (workspace facade crate).
//!
//! This package exposes the `tui_yatzy::{core,store,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_yatzy_core as core;
pub use tui_yatzy_store as store;
pub use tui_yatzy_types as types;
