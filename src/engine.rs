//! Progression engine: the mutation entry points over a profile.
//!
//! Every entry point is a pure transform: it takes a profile by reference,
//! returns a fresh profile plus the user-visible events, and never touches
//! the clock or a global random source. The caller persists the returned
//! profile atomically (all-or-nothing) and renders the events.

use chrono::NaiveDate;
use rand::Rng;

use crate::badges::{self, BadgeKey};
use crate::error::ProgressionError;
use crate::level_curve::LevelCurve;
use crate::profile::{Profile, StatKey};
use crate::streak;
use crate::wheel::{self, MissionKind, SpinKind};

/// User-visible outcome of a mutation, rendered by the caller as a
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionEvent {
    LevelUp { new_level: u32 },
    BadgeUnlocked { key: BadgeKey },
    StreakBonus { amount: u64 },
    SpinResult { xp_value: u64, segment: usize },
}

/// Stateless orchestrator. Owns only the precomputed level curve; all user
/// state lives in the [`Profile`] values passing through.
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    curve: LevelCurve,
}

impl ProgressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    /// Record one correct answer worth `base_xp`.
    ///
    /// Advances the streak for `today` (the first event of a day also grants
    /// the streak bonus), applies the XP, and re-evaluates badges. Emits
    /// `StreakBonus`, `LevelUp`, and `BadgeUnlocked` events as they occur.
    pub fn record_correct_answer(
        &self,
        profile: &Profile,
        base_xp: u64,
        today: NaiveDate,
    ) -> Result<(Profile, Vec<ProgressionEvent>), ProgressionError> {
        let mut next = self.fresh(profile, today)?;
        let mut events = Vec::new();

        let outcome = streak::advance(next.last_activity, next.streak, today);
        next.streak = outcome.streak;
        next.last_activity = Some(outcome.last_activity);
        if outcome.bonus_xp > 0 {
            events.push(ProgressionEvent::StreakBonus {
                amount: outcome.bonus_xp,
            });
        }

        let previous_level = next.level;
        next.xp += base_xp + outcome.bonus_xp;
        next.sync_level(&self.curve);
        if next.level > previous_level {
            events.push(ProgressionEvent::LevelUp {
                new_level: next.level,
            });
        }

        for key in badges::evaluate(&mut next) {
            events.push(ProgressionEvent::BadgeUnlocked { key });
        }

        Ok((next, events))
    }

    /// Claim an unlocked badge into the permanent collection.
    ///
    /// Re-evaluates badges afterwards: the claimed count is itself a badge
    /// progress source, so collection badges unlock here.
    pub fn claim_badge(
        &self,
        profile: &Profile,
        key: BadgeKey,
    ) -> Result<(Profile, Vec<ProgressionEvent>), ProgressionError> {
        let mut next = self.normalized(profile)?;
        badges::claim(&mut next, key)?;
        let events = badges::evaluate(&mut next)
            .into_iter()
            .map(|key| ProgressionEvent::BadgeUnlocked { key })
            .collect();
        Ok((next, events))
    }

    /// Equip a claimed badge, or unequip with `None`.
    pub fn equip_badge(
        &self,
        profile: &Profile,
        key: Option<BadgeKey>,
    ) -> Result<Profile, ProgressionError> {
        let mut next = self.normalized(profile)?;
        if let Some(key) = key {
            if !next.badges.contains(&key) {
                return Err(ProgressionError::InvalidClaim(key));
            }
        }
        next.equipped_badge = key;
        Ok(next)
    }

    /// Claim one daily spin of the given kind.
    pub fn claim_spin(
        &self,
        profile: &Profile,
        kind: SpinKind,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<(Profile, ProgressionEvent), ProgressionError> {
        let mut next = self.fresh(profile, today)?;
        let (xp_value, segment) = wheel::claim_spin(&mut next, kind, rng)?;
        next.xp += xp_value;
        next.sync_level(&self.curve);
        Ok((next, ProgressionEvent::SpinResult { xp_value, segment }))
    }

    /// Record a mission completion reported by the surrounding app. The
    /// flag gates the matching spin kind for the rest of the day.
    pub fn report_mission(
        &self,
        profile: &Profile,
        mission: MissionKind,
        today: NaiveDate,
    ) -> Result<Profile, ProgressionError> {
        let mut next = self.fresh(profile, today)?;
        next.spin_state.missions_completed.insert(mission, true);
        Ok(next)
    }

    /// Increment a stat counter and re-evaluate badges; stat changes can
    /// unlock badges without any XP event.
    pub fn report_stat(
        &self,
        profile: &Profile,
        key: StatKey,
        delta: u64,
    ) -> Result<(Profile, Vec<ProgressionEvent>), ProgressionError> {
        let mut next = self.normalized(profile)?;
        next.add_stat(key, delta);
        let events = badges::evaluate(&mut next)
            .into_iter()
            .map(|key| ProgressionEvent::BadgeUnlocked { key })
            .collect();
        Ok((next, events))
    }

    /// XP progress within the current level: (XP into the level, level span).
    /// The span is never zero, even at the maximum level.
    pub fn level_progress(&self, profile: &Profile) -> (u64, u64) {
        let (start, next_target) = self.curve.xp_window_for(profile.level);
        (profile.xp.saturating_sub(start), next_target - start)
    }

    /// Validate, clone, and recompute derived fields. Caller-supplied
    /// `level` is never trusted.
    fn normalized(&self, profile: &Profile) -> Result<Profile, ProgressionError> {
        profile.validate()?;
        let mut next = profile.clone();
        next.sync_level(&self.curve);
        Ok(next)
    }

    /// `normalized` plus the lazy daily reset of spin and mission flags.
    fn fresh(&self, profile: &Profile, today: NaiveDate) -> Result<Profile, ProgressionError> {
        let mut next = self.normalized(profile)?;
        next.spin_state.ensure_fresh_day(today);
        Ok(next)
    }
}
