//! Scoring module - upper-section category math and the bonus
//!
//! All functions are pure; the engine calls them with the dice and score
//! table it owns. A category scores `count of matching faces × face value`,
//! and a fixed bonus is granted once the committed category sum reaches the
//! limit (63 is three of each face).

use crate::types::{Category, BONUS_POINTS, BONUS_POINTS_LIMIT, NUM_CATEGORIES, NUM_DICE};

/// Total score split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Sum of committed category scores.
    pub categories: u32,
    /// Bonus at the category-sum limit: all or nothing.
    pub bonus: u32,
    pub total: u32,
}

/// Count dice showing the given face
///
/// Unthrown dice (spot 0) never match a face.
pub fn face_count(spots: &[u8; NUM_DICE], face: u8) -> u32 {
    spots.iter().filter(|&&spot| spot == face).count() as u32
}

/// Points a category scores against the given dice
/// count of matching faces × face value
pub fn category_score(spots: &[u8; NUM_DICE], category: Category) -> u32 {
    face_count(spots, category.face()) * category.face() as u32
}

/// Sum of committed category scores, bonus excluded
pub fn category_sum(scores: &[u32; NUM_CATEGORIES]) -> u32 {
    scores.iter().sum()
}

/// Bonus earned by a category sum (0 below the limit)
pub fn upper_bonus(category_sum: u32) -> u32 {
    if category_sum >= BONUS_POINTS_LIMIT {
        BONUS_POINTS
    } else {
        0
    }
}

/// Points still needed before the bonus is granted (0 once reached)
pub fn points_to_bonus(category_sum: u32) -> u32 {
    BONUS_POINTS_LIMIT.saturating_sub(category_sum)
}

/// Complete breakdown for a score table
pub fn score_breakdown(scores: &[u32; NUM_CATEGORIES]) -> ScoreBreakdown {
    let categories = category_sum(scores);
    let bonus = upper_bonus(categories);
    ScoreBreakdown {
        categories,
        bonus,
        total: categories.saturating_add(bonus),
    }
}

/// Total with bonus for a score table
pub fn total_with_bonus(scores: &[u32; NUM_CATEGORIES]) -> u32 {
    score_breakdown(scores).total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_count() {
        let spots = [3, 3, 3, 5, 6];
        assert_eq!(face_count(&spots, 3), 3);
        assert_eq!(face_count(&spots, 5), 1);
        assert_eq!(face_count(&spots, 1), 0);

        // Unthrown dice match nothing.
        let fresh = [0, 0, 0, 0, 0];
        for face in 1..=6 {
            assert_eq!(face_count(&fresh, face), 0);
        }
    }

    #[test]
    fn test_category_score() {
        let spots = [3, 3, 3, 5, 6];
        assert_eq!(category_score(&spots, Category::Threes), 9);
        assert_eq!(category_score(&spots, Category::Fives), 5);
        assert_eq!(category_score(&spots, Category::Sixes), 6);
        assert_eq!(category_score(&spots, Category::Ones), 0);

        // Five of a kind is the category maximum.
        let all_sixes = [6; NUM_DICE];
        assert_eq!(category_score(&all_sixes, Category::Sixes), 30);
    }

    #[test]
    fn test_upper_bonus_edges() {
        assert_eq!(upper_bonus(0), 0);
        assert_eq!(upper_bonus(62), 0);
        assert_eq!(upper_bonus(63), BONUS_POINTS);
        assert_eq!(upper_bonus(64), BONUS_POINTS);
    }

    #[test]
    fn test_points_to_bonus() {
        assert_eq!(points_to_bonus(0), 63);
        assert_eq!(points_to_bonus(54), 9);
        assert_eq!(points_to_bonus(63), 0);
        assert_eq!(points_to_bonus(100), 0);
    }

    #[test]
    fn test_breakdown_below_limit() {
        let scores = [0, 0, 9, 0, 0, 0];
        let breakdown = score_breakdown(&scores);
        assert_eq!(breakdown.categories, 9);
        assert_eq!(breakdown.bonus, 0);
        assert_eq!(breakdown.total, 9);
        assert_eq!(total_with_bonus(&scores), 9);
    }

    #[test]
    fn test_breakdown_at_limit() {
        // Three of each face: 3, 6, 9, 12, 15, 18 sums to 63 exactly.
        let scores = [3, 6, 9, 12, 15, 18];
        let breakdown = score_breakdown(&scores);
        assert_eq!(breakdown.categories, 63);
        assert_eq!(breakdown.bonus, 50);
        assert_eq!(breakdown.total, 113);
    }

    #[test]
    fn test_breakdown_maximum_table() {
        // Five of each face: 5, 10, 15, 20, 25, 30 sums to 105.
        let scores = [5, 10, 15, 20, 25, 30];
        assert_eq!(total_with_bonus(&scores), 105 + 50);
    }
}
