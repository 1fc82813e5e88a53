//! Round engine module - pure, deterministic, and testable
//!
//! This module holds all the game rules for one Yatzy round. It performs no
//! IO of its own (the score store is injected), making it:
//!
//! - **Deterministic**: the same seed replays the same dice, the scripted
//!   source replays exactly the spots a test dictates
//! - **Testable**: every rule violation is a typed value, never a panic
//! - **Portable**: runs the same under a terminal front end, a simulator,
//!   or a test harness
//!
//! # Module Structure
//!
//! - [`round`]: the [`RoundEngine`] state machine over throws, holds, and
//!   category commits
//! - [`rng`]: seeded and scripted [`DiceSource`]s
//! - [`scoring`]: category points, category sum, and the bonus
//! - [`snapshot`]: per-frame [`RoundSnapshot`] for renderers
//! - [`status`]: advisory [`StatusLine`] with clear tokens
//!
//! # Game Rules
//!
//! One round locks all six upper-section categories, one per turn:
//!
//! - **Turn**: up to three throws, then points must be set
//! - **Hold**: after the first throw of a turn, dice can be held between
//!   throws; the throw that spends the turn's last budget clears all holds
//! - **Commit**: a category scores `count of matching faces × face` and
//!   locks; locking the sixth category finishes the round
//! - **Bonus**: 50 extra points once the category sum reaches 63
//! - **Finish**: the completed round's record goes to the score store once
//!
//! # Example
//!
//! ```
//! use tui_yatzy_core::{DiceSource, RoundEngine};
//! use tui_yatzy_core::types::Category;
//! use tui_yatzy_store::MemoryScoreStore;
//!
//! // Scripted dice: the first throw shows three threes.
//! let dice = DiceSource::scripted(&[3, 3, 3, 5, 6]);
//! let mut round = RoundEngine::new("Alice", dice, MemoryScoreStore::new());
//!
//! round.throw_dice().unwrap();
//! for die in 0..5 {
//!     round.toggle_hold(die).unwrap();
//! }
//! round.throw_dice().unwrap();
//! round.throw_dice().unwrap();
//!
//! assert_eq!(round.commit_category(Category::Threes), Ok(9));
//! assert_eq!(round.total_score(), 9);
//! ```

pub mod rng;
pub mod round;
pub mod scoring;
pub mod snapshot;
pub mod status;

pub use tui_yatzy_types as types;

// Re-export commonly used types for convenience
pub use rng::{DiceSource, ScriptedSpots, SpotRng};
pub use round::{FinishedRound, RoundEngine, RuleViolation};
pub use scoring::{category_score, score_breakdown, total_with_bonus, ScoreBreakdown};
pub use snapshot::RoundSnapshot;
pub use status::StatusLine;
