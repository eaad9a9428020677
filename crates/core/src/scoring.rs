//! Scoring module - points and pace
//!
//! One point per cleared line. The drop interval shrinks by
//! `DROP_MS_PER_POINT` per point of score, but is only recomputed when a
//! settle moves the score onto a multiple of `SPEEDUP_EVERY`.

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_MS_PER_POINT, SPEEDUP_EVERY};

/// Points awarded for clearing `lines` rows in one settle
pub fn line_clear_points(lines: usize) -> u32 {
    lines as u32
}

/// Drop interval for a score: `max(50, 1000 - 2 * score)`
///
/// # Examples
///
/// ```
/// use tty_tetris_core::scoring::drop_interval_for_score;
///
/// assert_eq!(drop_interval_for_score(0), 1000);
/// assert_eq!(drop_interval_for_score(5), 990);
/// assert_eq!(drop_interval_for_score(1_000_000), 50);
/// ```
pub fn drop_interval_for_score(score: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(score.saturating_mul(DROP_MS_PER_POINT))
        .max(DROP_INTERVAL_FLOOR_MS)
}

/// Whether a settle that moved the score from `before` to `after` re-paces gravity
///
/// Only a changed, positive score sitting exactly on a multiple of
/// `SPEEDUP_EVERY` qualifies; jumping over a multiple does not.
pub fn crosses_speedup(before: u32, after: u32) -> bool {
    after != before && after > 0 && after % SPEEDUP_EVERY == 0
}

/// Next drop interval after a settle, or `None` if the pace stays
///
/// The result never exceeds `current`, so the pace can only speed up.
pub fn next_drop_interval(current: u32, before: u32, after: u32) -> Option<u32> {
    crosses_speedup(before, after).then(|| drop_interval_for_score(after).min(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 1);
        assert_eq!(line_clear_points(4), 4);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_for_score(10), 980);
        assert_eq!(drop_interval_for_score(475), 50);
        assert_eq!(drop_interval_for_score(500), 50);
        assert_eq!(drop_interval_for_score(u32::MAX), 50);
    }

    #[test]
    fn test_crosses_speedup() {
        assert!(crosses_speedup(4, 5));
        assert!(crosses_speedup(3, 5));
        assert!(crosses_speedup(9, 10));
        // unchanged score, even on a multiple
        assert!(!crosses_speedup(5, 5));
        assert!(!crosses_speedup(0, 0));
        // jumped over 5
        assert!(!crosses_speedup(4, 6));
    }

    #[test]
    fn test_next_drop_interval_never_slows_down() {
        assert_eq!(next_drop_interval(1000, 4, 5), Some(990));
        assert_eq!(next_drop_interval(500, 4, 5), Some(500));
        assert_eq!(next_drop_interval(1000, 5, 6), None);
    }

    #[test]
    fn test_drop_interval_monotonic_over_scores() {
        let mut prev = drop_interval_for_score(0);
        for score in 1..1000 {
            let next = drop_interval_for_score(score);
            assert!(next <= prev);
            assert!(next >= DROP_INTERVAL_FLOOR_MS);
            prev = next;
        }
    }
}
