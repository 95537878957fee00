//! Error taxonomy for the progression engine.
//!
//! Every variant is caller-recoverable: a rejected mutation leaves the
//! profile unchanged, and the caller decides user-facing messaging.

use thiserror::Error;

use crate::badges::BadgeKey;
use crate::wheel::SpinKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// Badge is not in the unclaimed pool (never unlocked, or already claimed).
    #[error("badge {0:?} is not awaiting claim")]
    InvalidClaim(BadgeKey),

    /// This spin kind was already claimed this calendar day.
    #[error("spin {0:?} was already claimed today")]
    AlreadyClaimedToday(SpinKind),

    /// The spin kind's mission or streak precondition is unmet.
    #[error("spin {0:?} is not yet unlocked today")]
    MissionNotComplete(SpinKind),

    /// Caller supplied a profile violating an invariant that cannot be
    /// repaired by recomputation.
    #[error("profile violates an invariant: {0}")]
    InvalidProfileState(String),
}
