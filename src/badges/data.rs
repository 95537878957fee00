//! Static badge definitions.

use super::types::{BadgeDef, BadgeKey, ProgressSource};
use crate::profile::StatKey;

/// All badge definitions in display order.
pub const ALL_BADGES: &[BadgeDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // XP MILESTONES
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        key: BadgeKey::NoviceScholar,
        name: "Novice Scholar",
        description: "Earn 1,000 XP",
        goal: 1_000,
        source: ProgressSource::Xp,
        icon: "📖",
    },
    BadgeDef {
        key: BadgeKey::RisingStar,
        name: "Rising Star",
        description: "Earn 5,000 XP",
        goal: 5_000,
        source: ProgressSource::Xp,
        icon: "🌟",
    },
    BadgeDef {
        key: BadgeKey::XpMaster,
        name: "XP Master",
        description: "Earn 25,000 XP",
        goal: 25_000,
        source: ProgressSource::Xp,
        icon: "🏆",
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAK MILESTONES
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        key: BadgeKey::StreakStarter,
        name: "Streak Starter",
        description: "Study 3 days in a row",
        goal: 3,
        source: ProgressSource::Streak,
        icon: "🔥",
    },
    BadgeDef {
        key: BadgeKey::StreakMaster,
        name: "Streak Master",
        description: "Study 7 days in a row",
        goal: 7,
        source: ProgressSource::Streak,
        icon: "🔥",
    },
    BadgeDef {
        key: BadgeKey::DedicatedLearner,
        name: "Dedicated Learner",
        description: "Study 30 days in a row",
        goal: 30,
        source: ProgressSource::Streak,
        icon: "💎",
    },
    // ═══════════════════════════════════════════════════════════════
    // MOCK TESTS
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        key: BadgeKey::MockTestRookie,
        name: "Mock Test Rookie",
        description: "Complete your first mock test",
        goal: 1,
        source: ProgressSource::Stat(StatKey::MockTestsCompleted),
        icon: "📝",
    },
    BadgeDef {
        key: BadgeKey::MockTestVeteran,
        name: "Mock Test Veteran",
        description: "Complete 10 mock tests",
        goal: 10,
        source: ProgressSource::Stat(StatKey::MockTestsCompleted),
        icon: "📝",
    },
    BadgeDef {
        key: BadgeKey::Perfectionist,
        name: "Perfectionist",
        description: "Score 100% on 5 mock tests",
        goal: 5,
        source: ProgressSource::Stat(StatKey::PerfectMockTests),
        icon: "💯",
    },
    // ═══════════════════════════════════════════════════════════════
    // STUDY HABITS
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        key: BadgeKey::QuestionMachine,
        name: "Question Machine",
        description: "Answer 500 practice questions correctly",
        goal: 500,
        source: ProgressSource::Stat(StatKey::PracticeQuestionsAnswered),
        icon: "⚡",
    },
    BadgeDef {
        key: BadgeKey::NoteTaker,
        name: "Note Taker",
        description: "Save 10 notes",
        goal: 10,
        source: ProgressSource::Stat(StatKey::NotesSaved),
        icon: "🗒️",
    },
    BadgeDef {
        key: BadgeKey::GrammarGuru,
        name: "Grammar Guru",
        description: "Complete 50 grammar items",
        goal: 50,
        source: ProgressSource::Stat(StatKey::GrammarItemsCompleted),
        icon: "🔤",
    },
    // ═══════════════════════════════════════════════════════════════
    // META
    // ═══════════════════════════════════════════════════════════════
    BadgeDef {
        key: BadgeKey::Collector,
        name: "Collector",
        description: "Claim 5 badges",
        goal: 5,
        source: ProgressSource::BadgesOwned,
        icon: "🎖️",
    },
];

/// Look up the definition for a badge key.
pub fn def_for(key: BadgeKey) -> Option<&'static BadgeDef> {
    ALL_BADGES.iter().find(|def| def.key == key)
}
