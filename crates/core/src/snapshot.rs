use crate::types::{
    RoundPhase, BONUS_POINTS_LIMIT, NUM_CATEGORIES, NUM_DICE, THROWS_PER_TURN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub spots: [u8; NUM_DICE],
    pub held: [bool; NUM_DICE],
    pub throws_left: u8,
    pub throws_taken: u32,
    pub scores: [u32; NUM_CATEGORIES],
    pub locked: [bool; NUM_CATEGORIES],
    pub phase: RoundPhase,
    pub total: u32,
    pub bonus: u32,
    pub points_to_bonus: u32,
}

impl RoundSnapshot {
    /// Reset to the state of a fresh round.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.phase.is_terminal()
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            spots: [0; NUM_DICE],
            held: [false; NUM_DICE],
            throws_left: THROWS_PER_TURN,
            throws_taken: 0,
            scores: [0; NUM_CATEGORIES],
            locked: [false; NUM_CATEGORIES],
            phase: RoundPhase::AwaitingThrow,
            total: 0,
            bonus: 0,
            points_to_bonus: BONUS_POINTS_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_returns_to_fresh_round_state() {
        let mut snap = RoundSnapshot::default();
        snap.spots = [3, 3, 3, 5, 6];
        snap.throws_left = 0;
        snap.phase = RoundPhase::Complete;
        snap.total = 113;

        snap.clear();
        assert_eq!(snap, RoundSnapshot::default());
        assert_eq!(snap.points_to_bonus, BONUS_POINTS_LIMIT);
        assert!(snap.playable());
    }

    #[test]
    fn test_terminal_phase_is_not_playable() {
        let mut snap = RoundSnapshot::default();
        snap.phase = RoundPhase::Complete;
        assert!(!snap.playable());
    }
}
