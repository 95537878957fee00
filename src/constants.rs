// Level curve
pub const MAX_LEVEL: u32 = 50;
pub const FIRST_LEVEL_INCREMENT: u64 = 500;
// The level-2 -> level-3 increment grows by this much over the first increment
pub const SECOND_INCREMENT_STEP: u64 = 300;
// Every later increment grows by this much over the previous one
pub const INCREMENT_STEP: u64 = 400;

// Streak bonus XP by streak length; index = min(streak, table length) - 1.
// Streaks past the table end stay at the last entry.
pub const STREAK_BONUS_TABLE: [u64; 7] = [50, 70, 90, 110, 130, 150, 200];

// Reward wheel segments: (xp value, weight). Weights are currently uniform;
// the 0-value segment is a real "no reward" outcome and must stay selectable.
pub const WHEEL_SEGMENTS: [(u64, u32); 8] = [
    (700, 1),
    (50, 1),
    (150, 1),
    (0, 1),
    (100, 1),
    (300, 1),
    (25, 1),
    (50, 1),
];

// Minimum streak length for the login-streak spin
pub const LOGIN_STREAK_SPIN_MIN: u32 = 3;
