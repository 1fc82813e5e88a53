//! Shared types module - game constants and value objects
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (round engine, score persistence, terminal rendering).
//!
//! # Game Constants
//!
//! Upper-section Yatzy parameters:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NUM_DICE` | 5 | Dice thrown each round |
//! | `MAX_SPOT` | 6 | Faces per die; also the category count |
//! | `THROWS_PER_TURN` | 3 | Throws allowed before a category must be scored |
//! | `BONUS_POINTS_LIMIT` | 63 | Category-sum threshold for the bonus |
//! | `BONUS_POINTS` | 50 | Bonus awarded at the threshold |
//! | `STATUS_CLEAR_MS` | 2000 | How long a status message stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_yatzy_types::{Category, RoundPhase, NUM_DICE, NUM_CATEGORIES};
//!
//! // Categories map one-to-one onto die faces.
//! let cat = Category::Threes;
//! assert_eq!(cat.face(), 3);
//! assert_eq!(cat.index(), 2);
//!
//! // Parse from string (case-insensitive) or face digit.
//! assert_eq!(Category::from_str("threes"), Some(Category::Threes));
//! assert_eq!(Category::from_str("3"), Some(Category::Threes));
//!
//! // A fresh round starts awaiting its first throw.
//! let phase = RoundPhase::AwaitingThrow;
//! assert!(!phase.is_terminal());
//!
//! assert_eq!(NUM_DICE, 5);
//! assert_eq!(NUM_CATEGORIES, 6);
//! ```

use serde::{Deserialize, Serialize};

/// Number of dice thrown each round (5)
pub const NUM_DICE: usize = 5;

/// Highest spot on a die face (6); spots run 1..=MAX_SPOT
pub const MAX_SPOT: u8 = 6;

/// Number of scoring categories, one per face value
pub const NUM_CATEGORIES: usize = MAX_SPOT as usize;

/// Throws allowed in one turn before points must be set (3)
pub const THROWS_PER_TURN: u8 = 3;

/// Category-sum threshold at which the bonus is awarded (63)
pub const BONUS_POINTS_LIMIT: u32 = 63;

/// Bonus points awarded when the category sum reaches the limit (50)
pub const BONUS_POINTS: u32 = 50;

/// Storage key for the persistent scoreboard list
pub const SCOREBOARD_KEY: &str = "scoreboard";

/// Display interval for a transient status message (2000ms)
pub const STATUS_CLEAR_MS: u64 = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_section_rule_defaults() {
        assert_eq!(NUM_DICE, 5);
        assert_eq!(MAX_SPOT, 6);
        assert_eq!(NUM_CATEGORIES, MAX_SPOT as usize);
        assert_eq!(THROWS_PER_TURN, 3);

        // 63 is three of each face: 3 * (1 + 2 + 3 + 4 + 5 + 6).
        assert_eq!(BONUS_POINTS_LIMIT, 63);
        assert_eq!(BONUS_POINTS, 50);
    }

    #[test]
    fn test_category_face_index_round_trip() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(cat.face() as usize, i + 1);
            assert_eq!(Category::from_index(i), Some(*cat));
            assert_eq!(Category::from_face(cat.face()), Some(*cat));
            assert_eq!(Category::from_str(cat.as_str()), Some(*cat));
        }
        assert_eq!(Category::from_index(NUM_CATEGORIES), None);
        assert_eq!(Category::from_face(0), None);
        assert_eq!(Category::from_face(MAX_SPOT + 1), None);
    }

    #[test]
    fn test_score_record_json_shape() {
        let record = ScoreRecord::new("Alice", 113);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","score":113}"#);
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

/// The six upper-section scoring categories
///
/// Each category counts dice showing its face value and scores
/// `count × face`. Categories are addressed by index (0..=5) where
/// `index + 1` equals the face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
}

impl Category {
    /// All categories in face order (ones first)
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Zero-based position in the category table
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_yatzy_types::Category;
    ///
    /// assert_eq!(Category::Ones.index(), 0);
    /// assert_eq!(Category::Sixes.index(), 5);
    /// ```
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The die face this category scores (1..=6)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_yatzy_types::Category;
    ///
    /// assert_eq!(Category::Ones.face(), 1);
    /// assert_eq!(Category::Fives.face(), 5);
    /// ```
    pub fn face(&self) -> u8 {
        *self as u8 + 1
    }

    /// Look up a category by table index
    ///
    /// Returns `None` when the index is outside the table.
    pub fn from_index(index: usize) -> Option<Self> {
        Category::ALL.get(index).copied()
    }

    /// Look up a category by die face (1..=6)
    pub fn from_face(face: u8) -> Option<Self> {
        if face == 0 {
            return None;
        }
        Category::from_index(face as usize - 1)
    }

    /// Parse a category from its name or face digit (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_yatzy_types::Category;
    ///
    /// assert_eq!(Category::from_str("ones"), Some(Category::Ones));
    /// assert_eq!(Category::from_str("Sixes"), Some(Category::Sixes));
    /// assert_eq!(Category::from_str("4"), Some(Category::Fours));
    /// assert_eq!(Category::from_str("yatzy"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ones" | "1" => Some(Category::Ones),
            "twos" | "2" => Some(Category::Twos),
            "threes" | "3" => Some(Category::Threes),
            "fours" | "4" => Some(Category::Fours),
            "fives" | "5" => Some(Category::Fives),
            "sixes" | "6" => Some(Category::Sixes),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
        }
    }
}

/// Phase of a round, derived from the throw budget and category locks
///
/// The cycle within one turn goes:
/// AwaitingThrow → MidTurn → AwaitingCommit → (commit) → AwaitingThrow,
/// until every category is locked and the round is `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// New turn, no throw taken yet; holding dice is not allowed.
    AwaitingThrow,
    /// At least one throw taken and at least one left; dice may be held.
    MidTurn,
    /// Throw budget exhausted; a category must be scored.
    AwaitingCommit,
    /// All categories locked; only reset is accepted.
    Complete,
}

impl RoundPhase {
    /// True once the round has finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundPhase::Complete)
    }

    /// Convert to lowercase string for display and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::AwaitingThrow => "awaiting-throw",
            RoundPhase::MidTurn => "mid-turn",
            RoundPhase::AwaitingCommit => "awaiting-commit",
            RoundPhase::Complete => "complete",
        }
    }
}

/// A finished round's entry on the scoreboard
///
/// Produced once per completed round and handed to the score store.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
