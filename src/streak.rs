//! Daily streak state machine.
//!
//! Streaks count consecutive calendar days with at least one qualifying
//! event. All comparisons are calendar-date equality, never elapsed time:
//! 23:59 and 00:01 the next minute are different days.

use chrono::NaiveDate;

use crate::constants::STREAK_BONUS_TABLE;

/// Result of advancing the streak for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOutcome {
    pub streak: u32,
    pub last_activity: NaiveDate,
    /// One-time daily bonus XP; 0 for every event after the first of a day.
    pub bonus_xp: u64,
    /// True for the first qualifying event of a calendar day.
    pub first_event_today: bool,
}

/// Bonus XP for a streak of the given length, capped at the table end.
pub fn streak_bonus(streak: u32) -> u64 {
    let index = (streak.max(1) as usize).min(STREAK_BONUS_TABLE.len()) - 1;
    STREAK_BONUS_TABLE[index]
}

/// Advance the streak for a qualifying event on `today`.
///
/// - First ever event: streak starts at 1.
/// - Same day as the last event: streak unchanged, no bonus.
/// - Exactly one day later: streak continues.
/// - Any other gap (including a clock moving backwards): streak resets to 1.
pub fn advance(
    last_activity: Option<NaiveDate>,
    previous_streak: u32,
    today: NaiveDate,
) -> StreakOutcome {
    let last = match last_activity {
        Some(last) => last,
        None => {
            return StreakOutcome {
                streak: 1,
                last_activity: today,
                bonus_xp: streak_bonus(1),
                first_event_today: true,
            }
        }
    };

    match today.signed_duration_since(last).num_days() {
        0 => StreakOutcome {
            streak: previous_streak,
            last_activity: today,
            bonus_xp: 0,
            first_event_today: false,
        },
        1 => {
            let streak = previous_streak + 1;
            StreakOutcome {
                streak,
                last_activity: today,
                bonus_xp: streak_bonus(streak),
                first_event_today: true,
            }
        }
        _ => StreakOutcome {
            streak: 1,
            last_activity: today,
            bonus_xp: streak_bonus(1),
            first_event_today: true,
        },
    }
}
