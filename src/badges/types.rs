//! Badge system types and the unlock/claim state machine.

use serde::{Deserialize, Serialize};

use crate::error::ProgressionError;
use crate::profile::{Profile, StatKey};

/// Unique identifier for each badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKey {
    // XP milestones
    NoviceScholar,
    RisingStar,
    XpMaster,
    // Streak milestones
    StreakStarter,
    StreakMaster,
    DedicatedLearner,
    // Mock tests
    MockTestRookie,
    MockTestVeteran,
    Perfectionist,
    // Study habits
    QuestionMachine,
    NoteTaker,
    GrammarGuru,
    // Meta
    Collector,
}

/// Where a badge reads its progress value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    Xp,
    Streak,
    /// Number of claimed badges.
    BadgesOwned,
    Stat(StatKey),
}

/// Static definition of a badge.
#[derive(Debug, Clone)]
pub struct BadgeDef {
    pub key: BadgeKey,
    pub name: &'static str,
    pub description: &'static str,
    pub goal: u64,
    pub source: ProgressSource,
    pub icon: &'static str,
}

/// Progress toward one badge, for the UI gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeProgress {
    pub key: BadgeKey,
    pub current: u64,
    pub goal: u64,
    /// Goal reached but not yet claimed.
    pub unlocked: bool,
    pub claimed: bool,
}

/// Current value of a progress source for this profile.
pub fn progress_value(profile: &Profile, source: ProgressSource) -> u64 {
    match source {
        ProgressSource::Xp => profile.xp,
        ProgressSource::Streak => profile.streak as u64,
        ProgressSource::BadgesOwned => profile.badges.len() as u64,
        ProgressSource::Stat(key) => profile.stat(key),
    }
}

/// Move every newly qualified badge into the unclaimed pool.
///
/// A badge already claimed or already unclaimed is never returned again, so
/// repeated evaluation without a state change yields nothing (idempotent).
pub fn evaluate(profile: &mut Profile) -> Vec<BadgeKey> {
    let mut newly_unlocked = Vec::new();
    for def in super::data::ALL_BADGES {
        if profile.badges.contains(&def.key) || profile.unclaimed_badges.contains(&def.key) {
            continue;
        }
        if progress_value(profile, def.source) >= def.goal {
            profile.unclaimed_badges.insert(def.key);
            newly_unlocked.push(def.key);
        }
    }
    newly_unlocked
}

/// Move a badge from the unclaimed pool into the permanent collection.
///
/// Claiming never auto-equips; equipping is its own user action.
pub fn claim(profile: &mut Profile, key: BadgeKey) -> Result<(), ProgressionError> {
    if !profile.unclaimed_badges.remove(&key) {
        return Err(ProgressionError::InvalidClaim(key));
    }
    profile.badges.insert(key);
    Ok(())
}

/// Progress toward every defined badge, in definition order.
pub fn badge_progress(profile: &Profile) -> Vec<BadgeProgress> {
    super::data::ALL_BADGES
        .iter()
        .map(|def| {
            let current = progress_value(profile, def.source);
            BadgeProgress {
                key: def.key,
                current: current.min(def.goal),
                goal: def.goal,
                unlocked: profile.unclaimed_badges.contains(&def.key),
                claimed: profile.badges.contains(&def.key),
            }
        })
        .collect()
}
