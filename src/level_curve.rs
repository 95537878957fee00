//! XP-to-level mapping.
//!
//! The curve is a precomputed table of cumulative XP thresholds, built once
//! at startup and used in both directions: XP -> level for display and
//! level-up detection, level -> XP window for progress bars.

use crate::constants::{FIRST_LEVEL_INCREMENT, INCREMENT_STEP, MAX_LEVEL, SECOND_INCREMENT_STEP};

/// Precomputed cumulative XP thresholds, one per level.
///
/// `thresholds[n - 1]` is the XP at which level `n` begins; level 1 begins
/// at 0. Increments between thresholds form an arithmetic-ish sequence:
/// 500 for the first step, +300 for the second, +400 for every step after.
#[derive(Debug, Clone)]
pub struct LevelCurve {
    thresholds: Vec<u64>,
}

impl LevelCurve {
    /// Build the curve for levels 1..=`max_level`. `max_level` must be >= 2.
    pub fn new(max_level: u32) -> Self {
        debug_assert!(max_level >= 2);
        let mut thresholds = Vec::with_capacity(max_level as usize);
        thresholds.push(0);
        let mut increment = FIRST_LEVEL_INCREMENT;
        for level in 2..=max_level {
            let prev = thresholds[(level - 2) as usize];
            thresholds.push(prev + increment);
            increment += if level == 2 {
                SECOND_INCREMENT_STEP
            } else {
                INCREMENT_STEP
            };
        }
        Self { thresholds }
    }

    /// Highest level whose threshold is <= `xp`. Never fails.
    pub fn level_for(&self, xp: u64) -> u32 {
        match self.thresholds.binary_search(&xp) {
            Ok(index) => (index + 1) as u32,
            Err(index) => index as u32,
        }
    }

    /// XP window for a level: (XP at which it begins, XP at which the next
    /// level begins). For the maximum level the upper bound extrapolates one
    /// more synthetic increment so a progress bar never divides by zero.
    pub fn xp_window_for(&self, level: u32) -> (u64, u64) {
        let level = level.clamp(1, self.max_level());
        let start = self.thresholds[(level - 1) as usize];
        let next = if (level as usize) < self.thresholds.len() {
            self.thresholds[level as usize]
        } else {
            let last_increment = if level >= 2 {
                start - self.thresholds[(level - 2) as usize]
            } else {
                FIRST_LEVEL_INCREMENT
            };
            start + last_increment + INCREMENT_STEP
        };
        (start, next)
    }

    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::new(MAX_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_increasing() {
        let curve = LevelCurve::default();
        for level in 1..curve.max_level() {
            let (start, next) = curve.xp_window_for(level);
            assert!(next > start, "window for level {} has no span", level);
            let (next_start, _) = curve.xp_window_for(level + 1);
            assert_eq!(next, next_start);
        }
    }

    #[test]
    fn test_early_thresholds() {
        let curve = LevelCurve::default();
        // 0, 500, 500+800, 1300+1200, ...
        assert_eq!(curve.xp_window_for(1), (0, 500));
        assert_eq!(curve.xp_window_for(2), (500, 1300));
        assert_eq!(curve.xp_window_for(3), (1300, 2500));
    }

    #[test]
    fn test_level_for_boundaries() {
        let curve = LevelCurve::default();
        assert_eq!(curve.level_for(0), 1);
        assert_eq!(curve.level_for(499), 1);
        assert_eq!(curve.level_for(500), 2);
        assert_eq!(curve.level_for(1299), 2);
        assert_eq!(curve.level_for(1300), 3);
    }

    #[test]
    fn test_level_for_matches_windows() {
        let curve = LevelCurve::default();
        for level in 1..=curve.max_level() {
            let (start, next) = curve.xp_window_for(level);
            assert_eq!(curve.level_for(start), level);
            if level < curve.max_level() {
                assert_eq!(curve.level_for(next - 1), level);
            }
        }
    }

    #[test]
    fn test_max_level_window_has_span() {
        let curve = LevelCurve::default();
        let max = curve.max_level();
        let (start, next) = curve.xp_window_for(max);
        assert!(next > start);
        // XP past the top of the table still reports the max level
        assert_eq!(curve.level_for(next + 1_000_000), max);
    }

    #[test]
    fn test_level_is_monotonic_in_xp() {
        let curve = LevelCurve::default();
        let mut previous = 0;
        for xp in (0..200_000).step_by(137) {
            let level = curve.level_for(xp);
            assert!(level >= previous);
            previous = level;
        }
    }
}
