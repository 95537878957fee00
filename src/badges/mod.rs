//! Badge system module.
//!
//! Badges are achievements with a numeric goal against a progress source.
//! Unlocking and claiming are separate user actions: evaluation moves a
//! qualified badge into the unclaimed pool, and an explicit claim moves it
//! into the permanent collection.

pub mod data;
pub mod types;

pub use data::{def_for, ALL_BADGES};
pub use types::{badge_progress, claim, evaluate, BadgeDef, BadgeKey, BadgeProgress, ProgressSource};
