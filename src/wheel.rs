//! Daily reward wheel.
//!
//! A fixed list of weighted segments and a gated, once-per-day-per-kind
//! claim. The random source is injected so draws are deterministic in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{LOGIN_STREAK_SPIN_MIN, WHEEL_SEGMENTS};
use crate::error::ProgressionError;
use crate::profile::Profile;

/// Mission flags reported by the surrounding app; each gates one spin kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionKind {
    PracticeSession,
    MockTest,
}

/// The four independently claimable spin kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinKind {
    Free,
    PracticeSession,
    MockTest,
    LoginStreak,
}

impl SpinKind {
    /// All spin kinds in display order.
    pub const ALL: [SpinKind; 4] = [
        SpinKind::Free,
        SpinKind::PracticeSession,
        SpinKind::MockTest,
        SpinKind::LoginStreak,
    ];

    /// The mission gating this kind, if any.
    pub fn mission(&self) -> Option<MissionKind> {
        match self {
            SpinKind::PracticeSession => Some(MissionKind::PracticeSession),
            SpinKind::MockTest => Some(MissionKind::MockTest),
            SpinKind::Free | SpinKind::LoginStreak => None,
        }
    }
}

/// Draw a segment index by weight. Degenerates to a uniform draw when all
/// weights are equal (the reference configuration).
pub fn draw_segment(rng: &mut impl Rng) -> usize {
    let total: u32 = WHEEL_SEGMENTS.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for (index, (_, weight)) in WHEEL_SEGMENTS.iter().enumerate() {
        if roll < *weight {
            return index;
        }
        roll -= weight;
    }
    WHEEL_SEGMENTS.len() - 1
}

/// Check whether a spin kind can be claimed right now.
///
/// The once-per-day flag is checked before the precondition, so re-claiming
/// an already claimed kind always reports `AlreadyClaimedToday`.
pub fn check_eligibility(profile: &Profile, kind: SpinKind) -> Result<(), ProgressionError> {
    if profile.spin_state.spin_claimed(kind) {
        return Err(ProgressionError::AlreadyClaimedToday(kind));
    }
    let eligible = match kind {
        SpinKind::Free => true,
        SpinKind::LoginStreak => profile.streak >= LOGIN_STREAK_SPIN_MIN,
        SpinKind::PracticeSession | SpinKind::MockTest => match kind.mission() {
            Some(mission) => profile.spin_state.mission_completed(mission),
            None => false,
        },
    };
    if eligible {
        Ok(())
    } else {
        Err(ProgressionError::MissionNotComplete(kind))
    }
}

/// Claim one spin: check eligibility, draw a segment, mark the kind claimed.
///
/// Returns the awarded XP and the segment index. The caller applies the XP
/// and must have run the daily reset first.
pub fn claim_spin(
    profile: &mut Profile,
    kind: SpinKind,
    rng: &mut impl Rng,
) -> Result<(u64, usize), ProgressionError> {
    check_eligibility(profile, kind)?;
    let segment = draw_segment(rng);
    let (xp_value, _) = WHEEL_SEGMENTS[segment];
    profile.spin_state.spins_claimed.insert(kind, true);
    Ok((xp_value, segment))
}
