//! The per-user progress record (aggregate root).
//!
//! A [`Profile`] is a plain value: every engine entry point takes one in and
//! returns a new one, and the caller owns persistence. Nothing here reads
//! the clock or mutates shared state.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::BadgeKey;
use crate::error::ProgressionError;
use crate::level_curve::LevelCurve;
use crate::wheel::{MissionKind, SpinKind};

/// Named counters reported by the surrounding app. Monotonically
/// non-decreasing; the engine only ever increments them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    PracticeQuestionsAnswered,
    MockTestsCompleted,
    PerfectMockTests,
    NotesSaved,
    GrammarItemsCompleted,
}

/// Daily spin and mission flags. Reset lazily: the first operation that
/// observes a new calendar day clears everything before acting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpinState {
    pub last_reset: Option<NaiveDate>,
    /// Missions completed today; absent means false.
    pub missions_completed: HashMap<MissionKind, bool>,
    /// Spin kinds already claimed today; absent means false.
    pub spins_claimed: HashMap<SpinKind, bool>,
}

impl SpinState {
    /// Clear all daily flags if `today` differs from the last reset day.
    pub fn ensure_fresh_day(&mut self, today: NaiveDate) {
        if self.last_reset != Some(today) {
            self.missions_completed.clear();
            self.spins_claimed.clear();
            self.last_reset = Some(today);
        }
    }

    pub fn mission_completed(&self, kind: MissionKind) -> bool {
        self.missions_completed.get(&kind).copied().unwrap_or(false)
    }

    pub fn spin_claimed(&self, kind: SpinKind) -> bool {
        self.spins_claimed.get(&kind).copied().unwrap_or(false)
    }
}

/// One user's complete progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Cumulative XP; never decreases.
    pub xp: u64,
    /// Derived from `xp` via the level curve; recomputed on every mutation.
    pub level: u32,
    /// Consecutive calendar days with at least one qualifying event.
    pub streak: u32,
    /// Date of the last streak-affecting event.
    pub last_activity: Option<NaiveDate>,
    /// Claimed badges; only grows.
    pub badges: HashSet<BadgeKey>,
    /// Unlocked but not yet claimed; disjoint from `badges`.
    pub unclaimed_badges: HashSet<BadgeKey>,
    /// Cosmetic selection; must be a claimed badge.
    pub equipped_badge: Option<BadgeKey>,
    pub stats: HashMap<StatKey, u64>,
    pub spin_state: SpinState,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            streak: 0,
            last_activity: None,
            badges: HashSet::new(),
            unclaimed_badges: HashSet::new(),
            equipped_badge: None,
            stats: HashMap::new(),
            spin_state: SpinState::default(),
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stat counter; absent means 0.
    pub fn stat(&self, key: StatKey) -> u64 {
        self.stats.get(&key).copied().unwrap_or(0)
    }

    /// Increment a stat counter.
    pub fn add_stat(&mut self, key: StatKey, delta: u64) {
        *self.stats.entry(key).or_insert(0) += delta;
    }

    /// Recompute `level` from `xp`. Derived fields from the caller are
    /// never trusted.
    pub fn sync_level(&mut self, curve: &LevelCurve) {
        self.level = curve.level_for(self.xp);
    }

    /// Check the invariants that recomputation cannot repair. Never fails
    /// on a profile produced by the engine itself.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if let Some(key) = self.badges.intersection(&self.unclaimed_badges).next() {
            return Err(ProgressionError::InvalidProfileState(format!(
                "badge {key:?} is both claimed and unclaimed"
            )));
        }
        if let Some(equipped) = self.equipped_badge {
            if !self.badges.contains(&equipped) {
                return Err(ProgressionError::InvalidProfileState(format!(
                    "equipped badge {equipped:?} is not claimed"
                )));
            }
        }
        Ok(())
    }
}
