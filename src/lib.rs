//! StudyPath - Progression & Rewards Engine
//!
//! A pure state machine over one per-user [`Profile`]: XP and levels, daily
//! streaks, badge unlock/claim, and the mission-gated daily reward wheel.
//! The caller supplies "today" and a random source on every entry point;
//! the engine never reads ambient time or randomness, mutates nothing it is
//! given, and leaves persistence to the application boundary.

pub mod badges;
pub mod constants;
pub mod engine;
pub mod error;
pub mod level_curve;
pub mod profile;
pub mod store;
pub mod streak;
pub mod wheel;

pub use badges::{BadgeDef, BadgeKey, BadgeProgress, ALL_BADGES};
pub use engine::{ProgressionEngine, ProgressionEvent};
pub use error::ProgressionError;
pub use level_curve::LevelCurve;
pub use profile::{Profile, SpinState, StatKey};
pub use store::ProfileStore;
pub use wheel::{MissionKind, SpinKind};
