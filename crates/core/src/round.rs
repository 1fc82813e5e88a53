//! Round engine module - one Yatzy round as a state machine
//!
//! This module ties together the dice source, scoring, status line, and the
//! score store. A round walks through turns of up to three throws, locks one
//! category per commit, and finalizes a score record when the last category
//! locks.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_yatzy_store::ScoreStore;

use crate::rng::DiceSource;
use crate::scoring::{self, ScoreBreakdown};
use crate::snapshot::RoundSnapshot;
use crate::status::StatusLine;
use crate::types::{Category, RoundPhase, ScoreRecord, NUM_CATEGORIES, NUM_DICE, THROWS_PER_TURN};

/// Prompt shown on a fresh round.
const THROW_PROMPT: &str = "Throw the dice";

/// A game-rule violation. Soft by definition: the operation is refused and
/// state stays as it was. The display text doubles as the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Throw attempted with the turn's budget spent.
    #[error("no throws left; set points for a category first")]
    NoThrowsLeft,
    /// Hold toggled before any throw of the current turn.
    #[error("throw the dice before holding")]
    HoldBeforeThrow,
    /// Commit attempted while throws remain in the turn.
    #[error("throw {remaining} more time(s) before setting points")]
    ThrowsRemaining { remaining: u8 },
    /// Commit attempted on a category that is already scored.
    #[error("points for {} already set", .0.as_str())]
    CategoryTaken(Category),
    /// Anything but reset once every category is locked.
    #[error("round is over; start a new round to keep playing")]
    RoundOver,
}

/// Completion report, produced once when the last category locks
/// (consumed by observers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRound {
    pub record: ScoreRecord,
    /// Error text when the score store rejected the append.
    pub persist_error: Option<String>,
}

impl FinishedRound {
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundEngine<S> {
    spots: [u8; NUM_DICE],
    held: [bool; NUM_DICE],
    throws_left: u8,
    /// Monotonic throw count since round start; a statistic, never a gate.
    throws_taken: u32,
    locked: [bool; NUM_CATEGORIES],
    scores: [u32; NUM_CATEGORIES],
    player: String,
    status: StatusLine,
    /// Set exactly once, by the commit that locks the final category.
    finished: Option<FinishedRound>,
    dice: DiceSource,
    store: S,
}

impl<S: ScoreStore> RoundEngine<S> {
    /// Create a round for `player`, drawing spots from `dice` and handing
    /// the finished score to `store`.
    pub fn new(player: impl Into<String>, dice: DiceSource, store: S) -> Self {
        let mut engine = Self {
            spots: [0; NUM_DICE],
            held: [false; NUM_DICE],
            throws_left: THROWS_PER_TURN,
            throws_taken: 0,
            locked: [false; NUM_CATEGORIES],
            scores: [0; NUM_CATEGORIES],
            player: player.into(),
            status: StatusLine::new(),
            finished: None,
            dice,
            store,
        };
        engine.status.set(THROW_PROMPT);
        engine
    }

    pub fn spots(&self) -> &[u8; NUM_DICE] {
        &self.spots
    }

    pub fn held(&self) -> &[bool; NUM_DICE] {
        &self.held
    }

    pub fn throws_left(&self) -> u8 {
        self.throws_left
    }

    pub fn throws_taken(&self) -> u32 {
        self.throws_taken
    }

    pub fn scores(&self) -> &[u32; NUM_CATEGORIES] {
        &self.scores
    }

    pub fn locked(&self) -> &[bool; NUM_CATEGORIES] {
        &self.locked
    }

    pub fn player_name(&self) -> &str {
        &self.player
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The phase is derived from the throw budget and the lock flags;
    /// there is no separate stored state to drift out of sync.
    pub fn phase(&self) -> RoundPhase {
        if self.locked.iter().all(|&locked| locked) {
            RoundPhase::Complete
        } else if self.throws_left == THROWS_PER_TURN {
            RoundPhase::AwaitingThrow
        } else if self.throws_left == 0 {
            RoundPhase::AwaitingCommit
        } else {
            RoundPhase::MidTurn
        }
    }

    /// Categories still open for scoring, in face order.
    pub fn unlocked_categories(&self) -> ArrayVec<Category, NUM_CATEGORIES> {
        Category::ALL
            .iter()
            .filter(|cat| !self.locked[cat.index()])
            .copied()
            .collect()
    }

    /// Current total: committed category points plus the bonus once the
    /// category sum reaches the limit.
    pub fn total_score(&self) -> u32 {
        scoring::total_with_bonus(&self.scores)
    }

    /// Total split into category sum and bonus.
    pub fn breakdown(&self) -> ScoreBreakdown {
        scoring::score_breakdown(&self.scores)
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.text()
    }

    /// Clear token of the current status message.
    pub fn status_token(&self) -> u64 {
        self.status.version()
    }

    /// Clear the status message the token belongs to. A stale token (a
    /// newer message has taken over) clears nothing.
    pub fn clear_status(&mut self, token: u64) -> bool {
        self.status.clear(token)
    }

    /// Completion report of a finished round. Returns it once.
    pub fn take_finished(&mut self) -> Option<FinishedRound> {
        self.finished.take()
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        let breakdown = self.breakdown();
        out.spots = self.spots;
        out.held = self.held;
        out.throws_left = self.throws_left;
        out.throws_taken = self.throws_taken;
        out.scores = self.scores;
        out.locked = self.locked;
        out.phase = self.phase();
        out.total = breakdown.total;
        out.bonus = breakdown.bonus;
        out.points_to_bonus = scoring::points_to_bonus(breakdown.categories);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Throw every die that is not held.
    ///
    /// Returns the indices that were rerolled. The throw that spends the
    /// last of the turn's budget also clears all holds; a hold never
    /// survives into the next turn.
    pub fn throw_dice(&mut self) -> Result<ArrayVec<usize, NUM_DICE>, RuleViolation> {
        if self.phase().is_terminal() {
            return Err(self.reject(RuleViolation::RoundOver));
        }
        if self.throws_left == 0 {
            return Err(self.reject(RuleViolation::NoThrowsLeft));
        }

        let mut rerolled = ArrayVec::new();
        for die in 0..NUM_DICE {
            if !self.held[die] {
                self.spots[die] = self.dice.roll_spot();
                rerolled.push(die);
            }
        }
        self.throws_left -= 1;
        self.throws_taken += 1;

        if self.throws_left == 0 {
            self.held = [false; NUM_DICE];
        }
        Ok(rerolled)
    }

    /// Hold or release a die for the next throw.
    ///
    /// Allowed only once the current turn has a throw behind it. Returns
    /// the new hold flag.
    ///
    /// # Panics
    ///
    /// Panics when `die` is out of range; that is a caller bug, not a
    /// game-rule condition.
    pub fn toggle_hold(&mut self, die: usize) -> Result<bool, RuleViolation> {
        assert!(die < NUM_DICE, "die index {die} out of range");

        if self.phase().is_terminal() {
            return Err(self.reject(RuleViolation::RoundOver));
        }
        if self.throws_left == THROWS_PER_TURN {
            return Err(self.reject(RuleViolation::HoldBeforeThrow));
        }
        self.held[die] = !self.held[die];
        Ok(self.held[die])
    }

    /// Set points for a category from the dice on the table.
    ///
    /// Valid only with the turn's throws spent. Locks the category,
    /// records `count of matching faces × face` and opens the next turn,
    /// or finalizes the round when this was the last open category.
    /// Returns the points recorded.
    pub fn commit_category(&mut self, category: Category) -> Result<u32, RuleViolation> {
        if self.phase().is_terminal() {
            return Err(self.reject(RuleViolation::RoundOver));
        }
        if self.throws_left > 0 {
            return Err(self.reject(RuleViolation::ThrowsRemaining {
                remaining: self.throws_left,
            }));
        }
        if self.locked[category.index()] {
            return Err(self.reject(RuleViolation::CategoryTaken(category)));
        }

        let points = scoring::category_score(&self.spots, category);
        self.scores[category.index()] = points;
        self.locked[category.index()] = true;
        self.held = [false; NUM_DICE];

        if self.locked.iter().all(|&locked| locked) {
            self.finalize();
        } else {
            self.throws_left = THROWS_PER_TURN;
        }
        Ok(points)
    }

    /// Abandon the current round and start a new one for `player`.
    ///
    /// Always succeeds. The dice source and the store carry over; the
    /// source keeps its position in its stream.
    pub fn reset_round(&mut self, player: impl Into<String>) {
        self.spots = [0; NUM_DICE];
        self.held = [false; NUM_DICE];
        self.throws_left = THROWS_PER_TURN;
        self.throws_taken = 0;
        self.locked = [false; NUM_CATEGORIES];
        self.scores = [0; NUM_CATEGORIES];
        self.player = player.into();
        self.finished = None;
        self.status.set(THROW_PROMPT);
    }

    /// Record a violation on the status line and hand it back.
    fn reject(&mut self, violation: RuleViolation) -> RuleViolation {
        self.status.set(violation.to_string());
        violation
    }

    /// Build the score record and hand it to the store. Runs exactly once
    /// per round, from the commit that locks the final category.
    ///
    /// A store failure never rolls the round back; the error is kept in
    /// the completion report and shown on the status line.
    fn finalize(&mut self) {
        let record = ScoreRecord::new(self.player.clone(), self.total_score());
        let persist_error = match self.store.append(record.clone()) {
            Ok(()) => None,
            Err(err) => Some(err.to_string()),
        };

        match &persist_error {
            None => {
                self.status.set(format!(
                    "Round over! {} points saved for {}",
                    record.score, record.name
                ));
            }
            Some(err) => {
                self.status.set(format!(
                    "Round over! {} points, but saving failed: {err}",
                    record.score
                ));
            }
        }
        self.finished = Some(FinishedRound {
            record,
            persist_error,
        });
    }
}
